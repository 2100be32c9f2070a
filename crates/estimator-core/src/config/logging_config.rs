//! Logging configuration.

use serde::{Deserialize, Serialize};

use crate::tracing::setup::DEFAULT_DIRECTIVE;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `ESTIMATOR_LOG` is unset.
    pub level: Option<String>,
}

impl LoggingConfig {
    pub fn effective_level(&self) -> &str {
        self.level.as_deref().unwrap_or(DEFAULT_DIRECTIVE)
    }
}
