//! Top-level estimator configuration with layered resolution.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{CatalogConfig, LoggingConfig, OutputConfig, OutputFormat, PricingConfig};
use crate::catalog::RuleCatalog;
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::{ConfigError, EstimatorResult};

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`ESTIMATOR_*`)
/// 3. Project config (`estimator.toml` in the working root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct EstimatorConfig {
    pub catalog: CatalogConfig,
    pub pricing: PricingConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub catalog_path: Option<PathBuf>,
    pub daily_rate: Option<f64>,
    pub format: Option<OutputFormat>,
    pub team_size: Option<u32>,
}

impl EstimatorConfig {
    /// Load configuration, reading `estimator.toml` from `root` if present.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config, |key| std::env::var(key).ok());

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    pub fn validate(config: &EstimatorConfig) -> Result<(), ConfigError> {
        let pricing = &config.pricing;
        for (field, value) in [
            ("pricing.min_rate_override", pricing.min_rate_override),
            ("pricing.max_rate_override", pricing.max_rate_override),
        ] {
            if let Some(v) = value {
                if !(v.is_finite() && v > 0.0) {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: "must be a positive number".to_string(),
                    });
                }
            }
        }
        if pricing.effective_min_rate() > pricing.effective_max_rate() {
            return Err(ConfigError::ValidationFailed {
                field: "pricing.min_rate_override".to_string(),
                message: format!(
                    "minimum {} exceeds maximum {}",
                    pricing.effective_min_rate(),
                    pricing.effective_max_rate()
                ),
            });
        }
        if let Some(rate) = pricing.daily_rate_override {
            pricing
                .check_rate(rate)
                .map_err(|e| ConfigError::ValidationFailed {
                    field: "pricing.daily_rate_override".to_string(),
                    message: e.to_string(),
                })?;
        }
        if config.output.team_size == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "output.team_size".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Apply the daily-rate override, if any, to a catalog snapshot.
    ///
    /// Without an override the snapshot is returned as is; with one, a new
    /// catalog is derived and the snapshot is left untouched.
    pub fn apply_pricing(&self, catalog: Arc<RuleCatalog>) -> EstimatorResult<Arc<RuleCatalog>> {
        match self.pricing.daily_rate_override {
            None => Ok(catalog),
            Some(rate) => {
                let rate = self.pricing.check_rate(rate)?;
                Ok(Arc::new(catalog.with_daily_rate(rate)?))
            }
        }
    }

    fn merge_toml_file(config: &mut EstimatorConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: EstimatorConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` win.
    pub fn merge(base: &mut EstimatorConfig, other: &EstimatorConfig) {
        if other.catalog.path.is_some() {
            base.catalog.path = other.catalog.path.clone();
        }

        if other.pricing.daily_rate_override.is_some() {
            base.pricing.daily_rate_override = other.pricing.daily_rate_override;
        }
        if other.pricing.min_rate_override.is_some() {
            base.pricing.min_rate_override = other.pricing.min_rate_override;
        }
        if other.pricing.max_rate_override.is_some() {
            base.pricing.max_rate_override = other.pricing.max_rate_override;
        }
        if other.pricing.allow_override.is_some() {
            base.pricing.allow_override = other.pricing.allow_override;
        }

        if other.output.format.is_some() {
            base.output.format = other.output.format;
        }
        if other.output.team_size.is_some() {
            base.output.team_size = other.output.team_size;
        }

        if other.logging.level.is_some() {
            base.logging.level = other.logging.level.clone();
        }
    }

    /// Apply environment overrides read through `lookup`.
    /// Pattern: `ESTIMATOR_CATALOG_PATH`, `ESTIMATOR_DAILY_RATE`, etc.
    /// Unparsable values are ignored.
    pub fn apply_env_overrides<F>(config: &mut EstimatorConfig, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("ESTIMATOR_CATALOG_PATH") {
            config.catalog.path = Some(PathBuf::from(val));
        }
        if let Some(val) = lookup("ESTIMATOR_DAILY_RATE") {
            if let Ok(v) = val.parse::<f64>() {
                config.pricing.daily_rate_override = Some(v);
            }
        }
        if let Some(val) = lookup("ESTIMATOR_ALLOW_RATE_OVERRIDE") {
            if let Ok(v) = val.parse::<bool>() {
                config.pricing.allow_override = Some(v);
            }
        }
        if let Some(val) = lookup("ESTIMATOR_OUTPUT_FORMAT") {
            if let Ok(v) = val.parse::<OutputFormat>() {
                config.output.format = Some(v);
            }
        }
        if let Some(val) = lookup("ESTIMATOR_TEAM_SIZE") {
            if let Ok(v) = val.parse::<u32>() {
                config.output.team_size = Some(v);
            }
        }
        if let Some(val) = lookup("ESTIMATOR_LOG_LEVEL") {
            config.logging.level = Some(val);
        }
    }

    /// Apply CLI overrides (highest priority).
    pub fn apply_cli_overrides(config: &mut EstimatorConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.catalog_path {
            config.catalog.path = Some(v.clone());
        }
        if let Some(v) = cli.daily_rate {
            config.pricing.daily_rate_override = Some(v);
        }
        if let Some(v) = cli.format {
            config.output.format = Some(v);
        }
        if let Some(v) = cli.team_size {
            config.output.team_size = Some(v);
        }
    }
}
