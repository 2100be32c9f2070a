use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_HIGH_COVERAGE, DEFAULT_LOW_COVERAGE};
use crate::types::QuestionId;

/// Qualitative confidence in an estimate, driven by advanced-question coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceBand {
    Low,
    Medium,
    High,
}

impl ConfidenceBand {
    pub fn as_str(self) -> &'static str {
        match self {
            ConfidenceBand::Low => "low",
            ConfidenceBand::Medium => "medium",
            ConfidenceBand::High => "high",
        }
    }
}

impl fmt::Display for ConfidenceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConfidenceBand::Low => "Low",
            ConfidenceBand::Medium => "Medium",
            ConfidenceBand::High => "High",
        })
    }
}

/// Coverage cut-offs for [`ConfidenceBand`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceThresholds {
    /// Coverage strictly below this is Low.
    pub low_below: f64,
    /// Coverage at or above this is High.
    pub high_at_least: f64,
}

impl Default for ConfidenceThresholds {
    fn default() -> Self {
        Self {
            low_below: DEFAULT_LOW_COVERAGE,
            high_at_least: DEFAULT_HIGH_COVERAGE,
        }
    }
}

impl ConfidenceThresholds {
    pub fn band_for(&self, coverage: f64) -> ConfidenceBand {
        if coverage < self.low_below {
            ConfidenceBand::Low
        } else if coverage >= self.high_at_least {
            ConfidenceBand::High
        } else {
            ConfidenceBand::Medium
        }
    }
}

/// When a risk trigger fires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "when", rename_all = "snake_case")]
pub enum TriggerCondition {
    /// A select answer is one of `values`.
    OneOf { values: Vec<String> },
    /// A boolean answer equals `flag`.
    Is { flag: bool },
    /// A numeric answer is `>= threshold`.
    AtLeast { threshold: f64 },
    /// A numeric answer is `<= threshold`.
    AtMost { threshold: f64 },
}

/// Catalog-declared rule that appends a fixed risk when its question has a
/// matching answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskTrigger {
    pub question: QuestionId,
    #[serde(flatten)]
    pub condition: TriggerCondition,
    pub risk: String,
    #[serde(default)]
    pub mitigation: Option<String>,
}

/// A fired risk trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub question_id: QuestionId,
    pub description: String,
    pub mitigation: Option<String>,
}

impl fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

/// Advisory metadata produced by the risk evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub confidence: ConfidenceBand,
    /// Fraction of advanced questions answered, in `[0, 1]`.
    pub coverage: f64,
    pub factors: Vec<RiskFactor>,
    /// Answered questions whose value differs from the catalog default.
    #[serde(default)]
    pub deviations: Vec<QuestionId>,
}
