/// Estimator version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of methodology phases.
pub const PHASE_COUNT: usize = 4;

/// Tolerance for a phase split summing to 1.0.
pub const PHASE_SPLIT_TOLERANCE: f64 = 1e-6;

/// Working days in a calendar week, used by timeline projections.
pub const WORKING_DAYS_PER_WEEK: f64 = 5.0;

/// Decimal places used when displaying effort.
pub const DISPLAY_DAY_PRECISION: u32 = 1;

/// Default currency precision when the catalog does not declare one.
pub const DEFAULT_CURRENCY_PRECISION: u32 = 2;

/// Default coverage below which confidence is Low.
pub const DEFAULT_LOW_COVERAGE: f64 = 0.30;

/// Default coverage at or above which confidence is High.
pub const DEFAULT_HIGH_COVERAGE: f64 = 0.70;

/// Project config file looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "estimator.toml";

/// Environment variable controlling log filtering.
pub const LOG_ENV_VAR: &str = "ESTIMATOR_LOG";
