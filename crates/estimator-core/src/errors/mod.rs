//! Error handling for the estimator.
//! One error enum per subsystem, `thiserror` only.

pub mod catalog_error;
pub mod config_error;
pub mod error_code;
pub mod estimation_error;
pub mod estimator_error;
pub mod export_error;

pub use catalog_error::{CatalogError, IntegrityViolation};
pub use config_error::ConfigError;
pub use error_code::EstimatorErrorCode;
pub use estimation_error::EstimationError;
pub use estimator_error::{EstimatorError, EstimatorResult};
pub use export_error::ExportError;
