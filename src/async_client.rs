//! Async wrapper around [`Analyzer`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all analyzer operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while
//! spreadsheets are parsed.
//!
//! # Example
//!
//! ```no_run
//! use realty_insights::{AnalysisRequest, AsyncAnalyzer};
//!
//! # async fn example() -> realty_insights::Result<()> {
//! let analyzer = AsyncAnalyzer::builder().data_dir("data").build()?;
//!
//! let resp = analyzer
//!     .analyze(AnalysisRequest::new().area("Wakad vs Aundh"))
//!     .await?;
//! println!("{}", resp.summary);
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{RealtyError, Result};
use crate::models::{AnalysisRequest, AnalysisResponse};
use crate::{Analyzer, AnalyzerBuilder};

// ---------------------------------------------------------------------------
// AsyncAnalyzerBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncAnalyzer`].
#[derive(Debug, Default)]
pub struct AsyncAnalyzerBuilder {
    inner: AnalyzerBuilder,
}

impl AsyncAnalyzerBuilder {
    /// Set the directory holding the sample dataset and stored uploads.
    pub fn data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.inner = self.inner.data_dir(path);
        self
    }

    /// File name of the fallback dataset inside the data directory.
    pub fn sample_file_name(mut self, name: &str) -> Self {
        self.inner = self.inner.sample_file_name(name);
        self
    }

    /// File name uploads are stored under inside the data directory.
    pub fn upload_file_name(mut self, name: &str) -> Self {
        self.inner = self.inner.upload_file_name(name);
        self
    }

    /// Build the async analyzer. No I/O happens here.
    pub fn build(self) -> Result<AsyncAnalyzer> {
        Ok(AsyncAnalyzer::from_analyzer(self.inner.build()?))
    }
}

// ---------------------------------------------------------------------------
// AsyncAnalyzer
// ---------------------------------------------------------------------------

/// Async wrapper around [`Analyzer`].
///
/// The analyzer is immutable, so it is shared through an [`Arc`] without a
/// lock; concurrent requests each get their own blocking task.
#[derive(Debug, Clone)]
pub struct AsyncAnalyzer {
    inner: Arc<Analyzer>,
}

impl AsyncAnalyzer {
    /// Create a new builder for configuring the async analyzer.
    pub fn builder() -> AsyncAnalyzerBuilder {
        AsyncAnalyzerBuilder::default()
    }

    /// Wrap an existing analyzer.
    pub fn from_analyzer(analyzer: Analyzer) -> Self {
        Self {
            inner: Arc::new(analyzer),
        }
    }

    /// Run a sync analyzer operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Analyzer) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let analyzer = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&analyzer))
            .await
            .map_err(|e| RealtyError::Internal(format!("Task join error: {e}")))?
    }

    /// Run a full analysis request.
    pub async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResponse> {
        self.run(move |a| a.analyze(&request)).await
    }

    /// Validate and store an uploaded spreadsheet.
    pub async fn upload(&self, bytes: Vec<u8>) -> Result<PathBuf> {
        self.run(move |a| a.upload(&bytes)).await
    }
}
