//! Configuration system for the estimator.
//! TOML-based, layered resolution: CLI > env > project file > defaults.

pub mod catalog_config;
pub mod estimator_config;
pub mod logging_config;
pub mod output_config;
pub mod pricing_config;

pub use catalog_config::CatalogConfig;
pub use estimator_config::{CliOverrides, EstimatorConfig};
pub use logging_config::LoggingConfig;
pub use output_config::{OutputConfig, OutputFormat};
pub use pricing_config::PricingConfig;
