//! Real-estate spreadsheet analysis.
//!
//! Loads a spreadsheet of yearly area prices and demand, normalizes its
//! loosely named columns, filters it by one or more areas, and produces a
//! templated text summary, chart-ready yearly series and the matching rows.
//! Everything runs in memory per request; nothing is cached between calls.
//!
//! # Quick start
//!
//! ```no_run
//! use realty_insights::{AnalysisRequest, Analyzer};
//!
//! let analyzer = Analyzer::builder().data_dir("data").build().unwrap();
//!
//! // Single area, using the stored upload or the sample dataset
//! let resp = analyzer.analyze(&AnalysisRequest::new().area("Wakad")).unwrap();
//! println!("{}", resp.summary);
//!
//! // Compare two areas in an uploaded file
//! let bytes = std::fs::read("prices.xlsx").unwrap();
//! let resp = analyzer
//!     .analyze(&AnalysisRequest::new().area("Ambegaon vs Aundh").bytes(bytes))
//!     .unwrap();
//! ```

pub mod area_query;
#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod normalize;
pub mod queries;
pub mod store;

pub use area_query::{parse_area_query, AreaQuery};
#[cfg(feature = "async")]
pub use async_client::AsyncAnalyzer;
pub use config::AnalyzerConfig;
pub use error::{RealtyError, Result};
pub use models::{
    AnalysisRequest, AnalysisResponse, AreaInput, CellValue, ChartPayload, ChartSeries, Dataset,
    DatasetSource, Field, RawTable, Record, SummaryStats, TimeSeries, YearPoint,
};
pub use normalize::{normalize, normalize_bytes, normalize_path};
pub use queries::{
    aggregate_by_year, compute_pct_change, filter_by_areas, format_number, summarize,
    summary_stats,
};
pub use store::DatasetStore;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::models::AreaSeries;

// ---------------------------------------------------------------------------
// AnalyzerBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`Analyzer`].
///
/// Use [`Analyzer::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](AnalyzerBuilder::build).
#[derive(Debug, Default)]
pub struct AnalyzerBuilder {
    data_dir: Option<PathBuf>,
    sample_file_name: Option<String>,
    upload_file_name: Option<String>,
}

impl AnalyzerBuilder {
    /// Set the directory holding the sample dataset and stored uploads.
    ///
    /// If not set, the platform data directory is used (e.g.
    /// `~/.local/share/realty-insights` on Linux).
    pub fn data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// File name of the fallback dataset inside the data directory.
    ///
    /// Defaults to `sample.xlsx`.
    pub fn sample_file_name(mut self, name: &str) -> Self {
        self.sample_file_name = Some(name.to_string());
        self
    }

    /// File name uploads are stored under inside the data directory.
    ///
    /// Defaults to `real_estate.xlsx`.
    pub fn upload_file_name(mut self, name: &str) -> Self {
        self.upload_file_name = Some(name.to_string());
        self
    }

    /// Build the analyzer.
    ///
    /// Nothing is read from disk here; datasets are loaded per request.
    pub fn build(self) -> Result<Analyzer> {
        let mut config = match self.data_dir {
            Some(dir) => AnalyzerConfig::new(dir),
            None => AnalyzerConfig::default(),
        };
        if let Some(name) = self.sample_file_name {
            config.sample_file_name = checked_file_name(name)?;
        }
        if let Some(name) = self.upload_file_name {
            config.upload_file_name = checked_file_name(name)?;
        }
        Ok(Analyzer {
            store: DatasetStore::new(config),
        })
    }
}

fn checked_file_name(name: String) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed.contains(['/', '\\']) {
        return Err(RealtyError::InvalidArgument(format!(
            "'{name}' is not a plain file name"
        )));
    }
    Ok(trimmed.to_string())
}

// ---------------------------------------------------------------------------
// Analyzer
// ---------------------------------------------------------------------------

/// Entry point wiring load, normalize, filter, aggregate and summarize into
/// one response per request.
///
/// Holds only immutable configuration, so a single instance can serve
/// concurrent requests.
#[derive(Debug, Clone)]
pub struct Analyzer {
    store: DatasetStore,
}

impl Analyzer {
    /// Create a new builder for configuring the analyzer.
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::default()
    }

    pub fn config(&self) -> &AnalyzerConfig {
        self.store.config()
    }

    pub fn store(&self) -> &DatasetStore {
        &self.store
    }

    /// Load and normalize the dataset for a source.
    pub fn load(&self, source: &DatasetSource) -> Result<Dataset> {
        Ok(normalize(self.store.load(source)?))
    }

    /// Validate and store an uploaded spreadsheet as the new default dataset.
    pub fn upload(&self, bytes: &[u8]) -> Result<PathBuf> {
        self.store.save_upload(bytes)
    }

    /// Run a full analysis request.
    ///
    /// Only dataset problems are errors. Unknown areas, empty selections and
    /// datasets with nothing to aggregate produce well-formed empty results.
    pub fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse> {
        let dataset = self.load(&request.source)?;
        let query = AreaQuery::from_input(request.area_input());
        Ok(analyze_dataset(&dataset, &query))
    }
}

/// Build the response for an already loaded dataset.
pub fn analyze_dataset(dataset: &Dataset, query: &AreaQuery) -> AnalysisResponse {
    let selection = if query.is_empty() {
        dataset.clone()
    } else {
        filter_by_areas(dataset, query.names())
    };

    if selection.is_empty() && !query.is_empty() {
        tracing::info!(areas = ?query.names(), "no rows for requested areas");
        return AnalysisResponse {
            summary: format!(
                "No data found for requested area(s): {}.",
                quoted_list(query.names())
            ),
            chart: ChartPayload::default(),
            table: Vec::new(),
            areas: query.names().to_vec(),
            stats: summary_stats(&selection),
        };
    }

    let (chart, summary) = if query.is_comparison() {
        let mut series = AreaSeries::default();
        let mut summaries = Vec::with_capacity(query.len());
        for area in query.names() {
            let part = filter_by_areas(dataset, std::slice::from_ref(area));
            series.insert(area.clone(), chart_series(&part, Some(area.as_str())));
            summaries.push(format!("{area}: {}", summarize(&part, Some(area.as_str()))));
        }
        (ChartPayload::ByArea { by_area: series }, summaries.join(" "))
    } else {
        let label = query.names().first().map(String::as_str);
        (
            ChartPayload::Single(chart_series(&selection, label)),
            summarize(&selection, label),
        )
    };

    AnalysisResponse {
        summary,
        chart,
        table: selection.table_rows(),
        areas: query.names().to_vec(),
        stats: summary_stats(&selection),
    }
}

/// Aggregate a slice into chart arrays, degrading to an empty series when
/// the aggregates cannot be charted.
fn chart_series(dataset: &Dataset, area: Option<&str>) -> ChartSeries {
    let ts = aggregate_by_year(dataset);
    match ChartSeries::try_from(&ts) {
        Ok(series) => series,
        Err(e) => {
            tracing::warn!(area = ?area, error = %e, "chart aggregation failed; returning empty series");
            ChartSeries::default()
        }
    }
}

fn quoted_list(names: &[String]) -> String {
    let quoted: Vec<String> = names.iter().map(|n| format!("'{n}'")).collect();
    format!("[{}]", quoted.join(", "))
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for Analyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = self.store.config();
        write!(
            f,
            "Analyzer(data_dir={}, sample={}, upload={})",
            config.data_dir.display(),
            config.sample_file_name,
            config.upload_file_name
        )
    }
}
