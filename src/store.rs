//! On-disk dataset locations: the bundled sample and the last upload.
//!
//! A request either brings its own spreadsheet or falls back to what is on
//! disk. The most recent upload takes precedence over the sample.

use std::fs;
use std::path::PathBuf;

use crate::config::AnalyzerConfig;
use crate::error::{RealtyError, Result};
use crate::loader;
use crate::models::{DatasetSource, RawTable};

/// Resolves and persists dataset files inside the configured data directory.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    config: AnalyzerConfig,
}

impl DatasetStore {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Path of the bundled fallback dataset.
    pub fn sample_path(&self) -> PathBuf {
        self.config.sample_path()
    }

    /// Path the last upload is stored at.
    pub fn upload_path(&self) -> PathBuf {
        self.config.upload_path()
    }

    /// The on-disk dataset a request without its own file should use.
    ///
    /// Prefers the last upload, then the sample. Fails with
    /// [`RealtyError::DatasetMissing`] when neither exists.
    pub fn stored_path(&self) -> Result<PathBuf> {
        let upload = self.upload_path();
        if upload.is_file() {
            return Ok(upload);
        }
        let sample = self.sample_path();
        if sample.is_file() {
            return Ok(sample);
        }
        Err(RealtyError::DatasetMissing { expected: sample })
    }

    /// Read the raw table for a request's dataset source.
    pub fn load(&self, source: &DatasetSource) -> Result<RawTable> {
        match source {
            DatasetSource::Bytes(bytes) => loader::load_bytes(bytes),
            DatasetSource::Path(path) => {
                if !path.is_file() {
                    return Err(RealtyError::DatasetMissing {
                        expected: path.clone(),
                    });
                }
                loader::load_path(path)
            }
            DatasetSource::Stored => {
                let path = self.stored_path()?;
                tracing::info!(path = %path.display(), "using stored dataset");
                loader::load_path(path)
            }
        }
    }

    /// Store `bytes` as the new last-uploaded dataset.
    ///
    /// The bytes must parse as a spreadsheet. They are written to a temp file
    /// first and renamed, so a failed write never replaces a good upload.
    pub fn save_upload(&self, bytes: &[u8]) -> Result<PathBuf> {
        let table = loader::load_bytes(bytes)?;

        let dest = self.upload_path();
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_dest = dest.with_extension(format!(
            "{}.tmp",
            dest.extension().and_then(|e| e.to_str()).unwrap_or("")
        ));

        let result = (|| -> Result<()> {
            fs::write(&tmp_dest, bytes)?;
            fs::rename(&tmp_dest, &dest)?;
            Ok(())
        })();

        if result.is_err() {
            let _ = fs::remove_file(&tmp_dest);
        }
        result?;

        tracing::info!(
            path = %dest.display(),
            bytes = bytes.len(),
            rows = table.rows.len(),
            "stored uploaded dataset"
        );
        Ok(dest)
    }

    /// Forget the last upload so requests fall back to the sample again.
    pub fn clear_upload(&self) -> Result<()> {
        let path = self.upload_path();
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}
