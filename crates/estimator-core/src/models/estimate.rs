use serde::{Deserialize, Serialize};

use super::answer::AnswerValue;
use super::mode::ComplexityMode;
use super::phase::Phase;
use super::risk::{ConfidenceBand, RiskFactor};
use super::totals::ResolvedWeight;
use crate::types::{QuestionId, RuleId};

/// Rounded values for presentation. Raw values stay on the parent record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayTotals {
    pub days: f64,
    pub cost: f64,
}

/// Effort and cost attributed to one methodology phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseContribution {
    pub phase: Phase,
    pub days: f64,
    pub cost: f64,
    /// Fraction of total days in `[0, 1]`; zero when the total is zero.
    pub percentage: f64,
    pub display: DisplayTotals,
    /// Methodology text from the catalog, when it declares one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Effort attributed to one catalog rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleContribution {
    pub rule_id: RuleId,
    pub question_id: QuestionId,
    pub label: String,
    pub selected: AnswerValue,
    pub resolved: ResolvedWeight,
    pub days: f64,
    /// Fraction of total days in `[0, 1]`.
    pub share: f64,
    pub display_days: f64,
    pub explanation: String,
}

/// The immutable output of one estimation run.
///
/// A pure value: changed answers produce a new result, never a patched one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateResult {
    pub catalog_version: String,
    pub mode: ComplexityMode,
    pub total_days: f64,
    pub total_cost: f64,
    pub daily_rate: f64,
    pub currency: String,
    pub currency_symbol: String,
    /// Decimal places used for displayed cost.
    pub currency_precision: u32,
    pub base_days: f64,
    pub minimum_top_up_days: f64,
    pub display: DisplayTotals,
    pub phases: Vec<PhaseContribution>,
    pub rules: Vec<RuleContribution>,
    pub confidence: ConfidenceBand,
    pub coverage: f64,
    pub risks: Vec<RiskFactor>,
    /// Answered questions whose value differs from the catalog default.
    #[serde(default)]
    pub deviations: Vec<QuestionId>,
}

impl EstimateResult {
    pub fn phase(&self, phase: Phase) -> Option<&PhaseContribution> {
        self.phases.iter().find(|p| p.phase == phase)
    }

    pub fn rule(&self, rule_id: &str) -> Option<&RuleContribution> {
        self.rules.iter().find(|r| r.rule_id.as_str() == rule_id)
    }
}
