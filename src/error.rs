use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum RealtyError {
    #[error("Could not read dataset: {0}")]
    DatasetParse(String),

    #[error(
        "No uploaded file found and sample file missing. Put a sample dataset at {} or upload one.",
        .expected.display()
    )]
    DatasetMissing { expected: PathBuf },

    #[error("Aggregation error: {0}")]
    Aggregation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl RealtyError {
    /// Message that is safe to hand back to an untrusted caller.
    ///
    /// Dataset problems are the caller's to fix, so they are reported as-is.
    /// Anything else is collapsed into a generic message.
    pub fn public_message(&self) -> String {
        match self {
            RealtyError::DatasetParse(_) | RealtyError::DatasetMissing { .. } => self.to_string(),
            _ => "Internal server error".to_string(),
        }
    }
}

impl From<calamine::Error> for RealtyError {
    fn from(err: calamine::Error) -> Self {
        RealtyError::DatasetParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RealtyError>;
