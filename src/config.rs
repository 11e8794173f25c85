use std::path::{Path, PathBuf};

/// File name of the bundled fallback dataset inside the data directory.
pub const DEFAULT_SAMPLE_FILE: &str = "sample.xlsx";

/// File name the most recent upload is stored under inside the data directory.
pub const DEFAULT_UPLOAD_FILE: &str = "real_estate.xlsx";

/// Static usage hint appended to every non-empty summary.
pub const SUMMARY_TIP: &str = "Tip: ask 'Show price growth for <area> over last N years' or 'Compare <area1> and <area2> demand trends'.";

/// Where datasets live when nothing is uploaded with a request.
///
/// Built once by [`AnalyzerBuilder`](crate::AnalyzerBuilder) and never mutated;
/// every path the analyzer touches is derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    pub data_dir: PathBuf,
    pub sample_file_name: String,
    pub upload_file_name: String,
}

impl AnalyzerConfig {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            sample_file_name: DEFAULT_SAMPLE_FILE.to_string(),
            upload_file_name: DEFAULT_UPLOAD_FILE.to_string(),
        }
    }

    pub fn sample_path(&self) -> PathBuf {
        self.data_dir.join(&self.sample_file_name)
    }

    pub fn upload_path(&self) -> PathBuf {
        self.data_dir.join(&self.upload_file_name)
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self::new(default_data_dir())
    }
}

pub fn default_data_dir() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("realty-insights")
    } else {
        PathBuf::from("data")
    }
}
