//! Daily-rate override settings.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Lowest rate an override may set. Default: 500.
pub const DEFAULT_MIN_RATE: f64 = 500.0;
/// Highest rate an override may set. Default: 5000.
pub const DEFAULT_MAX_RATE: f64 = 5000.0;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PricingConfig {
    /// Replaces the catalog's daily rate when set.
    pub daily_rate_override: Option<f64>,
    pub min_rate_override: Option<f64>,
    pub max_rate_override: Option<f64>,
    /// Whether overrides are honoured at all. Default: true.
    pub allow_override: Option<bool>,
}

impl PricingConfig {
    pub fn effective_min_rate(&self) -> f64 {
        self.min_rate_override.unwrap_or(DEFAULT_MIN_RATE)
    }

    pub fn effective_max_rate(&self) -> f64 {
        self.max_rate_override.unwrap_or(DEFAULT_MAX_RATE)
    }

    pub fn effective_allow_override(&self) -> bool {
        self.allow_override.unwrap_or(true)
    }

    /// Check a proposed daily rate against the override policy.
    pub fn check_rate(&self, rate: f64) -> Result<f64, ConfigError> {
        if !self.effective_allow_override() {
            return Err(ConfigError::InvalidValue {
                field: "pricing.daily_rate_override".to_string(),
                message: "rate overrides are disabled".to_string(),
            });
        }
        let (min, max) = (self.effective_min_rate(), self.effective_max_rate());
        if !rate.is_finite() || rate < min || rate > max {
            return Err(ConfigError::InvalidValue {
                field: "pricing.daily_rate_override".to_string(),
                message: format!("{rate} is outside the allowed range {min}..={max}"),
            });
        }
        Ok(rate)
    }
}
