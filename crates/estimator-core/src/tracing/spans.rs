//! Span definitions per operation: estimate, risk, breakdown, catalog reload.

/// Create an estimation span.
#[macro_export]
macro_rules! estimate_span {
    ($catalog_version:expr, $mode:expr) => {
        tracing::info_span!("estimator.estimate", catalog_version = %$catalog_version, mode = %$mode)
    };
}

/// Create a risk evaluation span.
#[macro_export]
macro_rules! risk_span {
    ($answer_count:expr) => {
        tracing::info_span!("estimator.risk", answers = $answer_count)
    };
}

/// Create a breakdown span.
#[macro_export]
macro_rules! breakdown_span {
    ($rule_count:expr) => {
        tracing::info_span!("estimator.breakdown", rules = $rule_count)
    };
}

/// Create a catalog reload span.
#[macro_export]
macro_rules! catalog_reload_span {
    ($path:expr) => {
        tracing::info_span!("estimator.catalog.reload", path = %$path)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const ESTIMATE: &str = "estimator.estimate";
    pub const RISK: &str = "estimator.risk";
    pub const BREAKDOWN: &str = "estimator.breakdown";
    pub const CATALOG_RELOAD: &str = "estimator.catalog.reload";
}
