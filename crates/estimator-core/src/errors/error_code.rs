//! Stable error codes for UI and CLI surfaces.

/// Every error enum implements this to provide a structured code string
/// that front ends can match on without parsing messages.
pub trait EstimatorErrorCode {
    /// Returns the error code string (e.g., "UNKNOWN_OPTION").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const MISSING_REQUIRED_ANSWER: &str = "MISSING_REQUIRED_ANSWER";
pub const UNKNOWN_OPTION: &str = "UNKNOWN_OPTION";
pub const UNKNOWN_QUESTION: &str = "UNKNOWN_QUESTION";
pub const CATALOG_INTEGRITY: &str = "CATALOG_INTEGRITY";
pub const CATALOG_NOT_FOUND: &str = "CATALOG_NOT_FOUND";
pub const CATALOG_PARSE_ERROR: &str = "CATALOG_PARSE_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const EXPORT_ERROR: &str = "EXPORT_ERROR";
