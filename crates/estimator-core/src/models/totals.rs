use serde::{Deserialize, Serialize};

use super::answer::AnswerValue;
use super::mode::ComplexityMode;
use super::phase::PhaseAmounts;
use crate::types::{QuestionId, RuleId};

/// Which entry of a rule table an answer resolved to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    Option { option: String },
    Tier { at_least: f64 },
    PerUnit { quantity: f64, per_unit: f64 },
    Steps { quantity: f64, steps: f64, per_step: f64 },
    Flag { value: bool },
}

/// Multiplier taken from another numeric answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    pub question_id: QuestionId,
    pub factor: f64,
}

/// A rule's resolved weight for one answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedWeight {
    pub resolution: Resolution,
    /// Days from the rule table before scaling.
    pub unit_weight: f64,
    /// For stepped rules the factor is already folded into the quantity.
    pub scale: Option<Scale>,
    /// Days this rule contributes.
    pub days: f64,
}

/// One rule's contribution to a run, before presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleShare {
    pub rule_id: RuleId,
    pub question_id: QuestionId,
    /// Position of the rule in catalog declaration order.
    pub declaration_index: usize,
    pub selected: AnswerValue,
    pub resolved: ResolvedWeight,
    /// The rule's days distributed across phases.
    pub phases: PhaseAmounts,
}

/// Unrounded output of the estimation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTotals {
    pub catalog_version: String,
    pub mode: ComplexityMode,
    pub base_days: f64,
    /// Days added to reach the catalog's minimum engagement, if any.
    pub minimum_top_up_days: f64,
    /// Base days plus top-up, distributed by the default split.
    pub base_phases: PhaseAmounts,
    pub rule_shares: Vec<RuleShare>,
    /// Sum of `base_phases` and every rule's phase allocation.
    pub phase_days: PhaseAmounts,
    pub total_days: f64,
    pub daily_rate: f64,
    pub total_cost: f64,
}

impl RawTotals {
    pub fn rule_days(&self) -> f64 {
        self.rule_shares.iter().map(|s| s.resolved.days).sum()
    }
}
