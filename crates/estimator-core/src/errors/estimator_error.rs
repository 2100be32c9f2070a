use super::error_code::EstimatorErrorCode;
use super::{CatalogError, ConfigError, EstimationError, ExportError};

/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum EstimatorError {
    #[error("Estimation error: {0}")]
    Estimation(#[from] EstimationError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

impl EstimatorErrorCode for EstimatorError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Estimation(e) => e.error_code(),
            Self::Catalog(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Export(e) => e.error_code(),
        }
    }
}

pub type EstimatorResult<T> = Result<T, EstimatorError>;
