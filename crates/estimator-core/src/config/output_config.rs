//! Output configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Rendering used for an estimate on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Csv,
    #[default]
    Text,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "text" | "txt" => Ok(Self::Text),
            other => Err(format!("unknown output format '{other}' (expected json, csv, or text)")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default: text.
    pub format: Option<OutputFormat>,
    /// People working in parallel, used for the timeline. Default: 1.
    pub team_size: Option<u32>,
}

impl OutputConfig {
    pub fn effective_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    pub fn effective_team_size(&self) -> u32 {
        self.team_size.unwrap_or(1)
    }
}
