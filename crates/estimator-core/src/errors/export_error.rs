use super::error_code::{self, EstimatorErrorCode};

/// Errors raised while rendering an estimate for export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported export format '{format}'")]
    UnsupportedFormat { format: String },
}

impl EstimatorErrorCode for ExportError {
    fn error_code(&self) -> &'static str {
        error_code::EXPORT_ERROR
    }
}
