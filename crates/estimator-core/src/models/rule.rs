use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::phase::PhaseSplit;
use super::question::AnswerKind;
use crate::types::{QuestionId, RuleId};

/// One row of a numeric tier table: values `>= at_least` resolve to `days`
/// until the next row's threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    pub at_least: f64,
    pub days: f64,
}

/// How a rule turns an answer into days. One variant per resolution strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RuleWeights {
    /// Exact option match.
    Categorical { weights: BTreeMap<String, f64> },
    /// Highest threshold not above the answer.
    Tiered { tiers: Vec<Tier> },
    /// `answer × per_unit`.
    Linear { per_unit: f64 },
    /// `ceil(max(quantity - included, 0) / step) × per_step`.
    Stepped {
        included: f64,
        step: f64,
        per_step: f64,
    },
    Boolean { when_true: f64, when_false: f64 },
}

impl RuleWeights {
    pub fn name(&self) -> &'static str {
        match self {
            RuleWeights::Categorical { .. } => "categorical",
            RuleWeights::Tiered { .. } => "tiered",
            RuleWeights::Linear { .. } => "linear",
            RuleWeights::Stepped { .. } => "stepped",
            RuleWeights::Boolean { .. } => "boolean",
        }
    }

    /// Whether this strategy can read answers of the given kind.
    pub fn accepts(&self, kind: &AnswerKind) -> bool {
        match self {
            RuleWeights::Categorical { .. } => matches!(kind, AnswerKind::SingleSelect { .. }),
            RuleWeights::Tiered { .. }
            | RuleWeights::Linear { .. }
            | RuleWeights::Stepped { .. } => matches!(kind, AnswerKind::Numeric { .. }),
            RuleWeights::Boolean { .. } => matches!(kind, AnswerKind::Boolean { .. }),
        }
    }

    /// Every configured day/coefficient value, for non-negativity checks.
    pub fn values(&self) -> Vec<(String, f64)> {
        match self {
            RuleWeights::Categorical { weights } => {
                weights.iter().map(|(k, v)| (k.clone(), *v)).collect()
            }
            RuleWeights::Tiered { tiers } => tiers
                .iter()
                .map(|t| (format!(">= {}", t.at_least), t.days))
                .collect(),
            RuleWeights::Linear { per_unit } => vec![("per_unit".to_string(), *per_unit)],
            RuleWeights::Stepped {
                included,
                step,
                per_step,
            } => vec![
                ("included".to_string(), *included),
                ("step".to_string(), *step),
                ("per_step".to_string(), *per_step),
            ],
            RuleWeights::Boolean {
                when_true,
                when_false,
            } => vec![
                ("when_true".to_string(), *when_true),
                ("when_false".to_string(), *when_false),
            ],
        }
    }
}

/// A weighted rule reading one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub id: RuleId,
    pub question: QuestionId,
    pub label: String,
    pub weights: RuleWeights,
    /// Numeric question whose answer multiplies this rule's contribution.
    #[serde(default)]
    pub scaled_by: Option<QuestionId>,
    /// Overrides the catalog's default phase split for this rule's days.
    #[serde(default)]
    pub phase_split: Option<PhaseSplit>,
}
