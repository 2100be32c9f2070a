//! Serialized catalog form, as written by administrators in YAML, JSON, or TOML.
//!
//! A document is untrusted until [`RuleCatalog::from_document`] validates it.
//!
//! [`RuleCatalog::from_document`]: super::RuleCatalog::from_document

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CURRENCY_PRECISION;
use crate::models::{
    ComplexityMode, ConfidenceThresholds, ModeDefinition, Phase, PhaseSplit, Question,
    RiskTrigger, Rule, RuleWeights,
};
use crate::types::{QuestionId, RuleId};

/// Daily rate and currency formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pricing {
    pub daily_rate: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Decimal places for displayed cost.
    #[serde(default = "default_precision")]
    pub precision: u32,
}

fn default_currency() -> String {
    "EUR".to_string()
}

fn default_currency_symbol() -> String {
    "€".to_string()
}

fn default_precision() -> u32 {
    DEFAULT_CURRENCY_PRECISION
}

fn default_version() -> String {
    "unversioned".to_string()
}

/// A rule as written in a document. `id` defaults to the question id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleDocument {
    #[serde(default)]
    pub id: Option<RuleId>,
    pub question: QuestionId,
    pub label: String,
    pub weights: RuleWeights,
    #[serde(default)]
    pub scaled_by: Option<QuestionId>,
    #[serde(default)]
    pub phase_split: Option<PhaseSplit>,
}

impl RuleDocument {
    pub fn effective_id(&self) -> RuleId {
        self.id
            .clone()
            .unwrap_or_else(|| RuleId::new(self.question.as_str()))
    }

    pub(crate) fn into_rule(self) -> Rule {
        Rule {
            id: self.effective_id(),
            question: self.question,
            label: self.label,
            weights: self.weights,
            scaled_by: self.scaled_by,
            phase_split: self.phase_split,
        }
    }
}

impl From<&Rule> for RuleDocument {
    fn from(rule: &Rule) -> Self {
        Self {
            id: Some(rule.id.clone()),
            question: rule.question.clone(),
            label: rule.label.clone(),
            weights: rule.weights.clone(),
            scaled_by: rule.scaled_by.clone(),
            phase_split: rule.phase_split,
        }
    }
}

/// Top-level catalog document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default = "default_version")]
    pub version: String,
    /// Effort always included, before any rule applies.
    pub base_days: f64,
    /// Floor for the total effort of an engagement.
    #[serde(default)]
    pub minimum_days: Option<f64>,
    pub pricing: Pricing,
    /// Split used for base days and for rules without their own split.
    #[serde(default)]
    pub default_phase_split: PhaseSplit,
    #[serde(default)]
    pub confidence: ConfidenceThresholds,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub rules: Vec<RuleDocument>,
    #[serde(default)]
    pub modes: BTreeMap<ComplexityMode, ModeDefinition>,
    #[serde(default)]
    pub risk_triggers: Vec<RiskTrigger>,
    /// Optional per-phase description text for reports.
    #[serde(default)]
    pub phases: BTreeMap<Phase, String>,
}
