use serde::{Deserialize, Serialize};

use super::dataset::TableRow;
use super::series::ChartPayload;

// ---------------------------------------------------------------------------
// SummaryStats — Structured numeric summary
// ---------------------------------------------------------------------------

/// The numbers behind the text summary, unformatted.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SummaryStats {
    pub record_count: usize,
    pub price_mean: Option<f64>,
    pub price_median: Option<f64>,
    pub price_pct_change: Option<f64>,
    pub demand_total: Option<f64>,
    pub demand_mean: Option<f64>,
    pub first_year: Option<i64>,
    pub last_year: Option<i64>,
    pub year_count: usize,
}

// ---------------------------------------------------------------------------
// AreaInput / AnalysisRequest — What a caller asks for
// ---------------------------------------------------------------------------

/// Area query as received: free text to be parsed, or an explicit list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AreaInput {
    Text(String),
    List(Vec<String>),
}

impl From<&str> for AreaInput {
    fn from(value: &str) -> Self {
        AreaInput::Text(value.to_string())
    }
}

impl From<Vec<String>> for AreaInput {
    fn from(value: Vec<String>) -> Self {
        AreaInput::List(value)
    }
}

/// Where the dataset for a request comes from.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DatasetSource {
    /// Spreadsheet bytes uploaded with the request.
    Bytes(Vec<u8>),
    /// A spreadsheet on disk.
    Path(std::path::PathBuf),
    /// The last stored upload, else the sample dataset.
    #[default]
    Stored,
}

/// A single analysis request.
///
/// Deserializes from `{"area": ...}` or `{"query": ...}`; `area` wins when both
/// are present and non-empty. The dataset source is never part of the body.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub area: Option<AreaInput>,
    #[serde(default)]
    pub query: Option<AreaInput>,
    #[serde(skip)]
    pub source: DatasetSource,
}

impl AnalysisRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn area<A: Into<AreaInput>>(mut self, area: A) -> Self {
        self.area = Some(area.into());
        self
    }

    pub fn source(mut self, source: DatasetSource) -> Self {
        self.source = source;
        self
    }

    pub fn bytes(self, bytes: Vec<u8>) -> Self {
        self.source(DatasetSource::Bytes(bytes))
    }

    pub fn path<P: AsRef<std::path::Path>>(self, path: P) -> Self {
        self.source(DatasetSource::Path(path.as_ref().to_path_buf()))
    }

    /// The area input to use, skipping blank values.
    pub fn area_input(&self) -> Option<&AreaInput> {
        [self.area.as_ref(), self.query.as_ref()]
            .into_iter()
            .flatten()
            .find(|input| match input {
                AreaInput::Text(s) => !s.trim().is_empty(),
                AreaInput::List(list) => !list.is_empty(),
            })
    }
}

// ---------------------------------------------------------------------------
// AnalysisResponse — Everything a caller renders
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResponse {
    pub summary: String,
    pub chart: ChartPayload,
    pub table: Vec<TableRow>,
    pub areas: Vec<String>,
    pub stats: SummaryStats,
}
