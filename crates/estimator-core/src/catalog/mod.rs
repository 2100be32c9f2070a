//! The validated rule catalog and its lifecycle.
//!
//! - [`document`]: the serialized form administrators edit.
//! - [`validation`]: load-time integrity checks.
//! - [`loader`]: reading YAML/JSON/TOML files.
//! - [`handle`]: the process-wide, atomically swappable catalog reference.

pub mod document;
pub mod handle;
pub mod loader;
pub mod validation;

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

pub use document::{CatalogDocument, Pricing, RuleDocument};
pub use handle::CatalogHandle;
pub use loader::{load_catalog, parse_catalog, parse_document, CatalogFormat};

use crate::errors::{CatalogError, IntegrityViolation};
use crate::models::{
    AnswerKind, AnswerSet, AnswerValue, ComplexityMode, ComplexityTier, ConfidenceThresholds,
    ModeDefinition, Phase, PhaseSplit, Question, QuestionSelection, RiskTrigger, Rule,
};
use crate::types::{QuestionId, RuleId};

/// An immutable, integrity-checked set of questions, weighted rules, and
/// global constants.
///
/// The only way to obtain one is through [`RuleCatalog::from_document`] (or
/// the loader), so every reference held by the engine has passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleCatalog {
    version: String,
    base_days: f64,
    minimum_days: Option<f64>,
    pricing: Pricing,
    default_split: PhaseSplit,
    confidence: ConfidenceThresholds,
    questions: Vec<Question>,
    question_index: HashMap<QuestionId, usize>,
    rules: Vec<Rule>,
    rule_index: HashMap<RuleId, usize>,
    modes: BTreeMap<ComplexityMode, ModeDefinition>,
    risk_triggers: Vec<RiskTrigger>,
    phase_descriptions: BTreeMap<Phase, String>,
}

impl RuleCatalog {
    /// Validate a document and build a catalog from it.
    ///
    /// Phase splits are normalised after validation so allocations sum back
    /// to their input exactly.
    pub fn from_document(doc: CatalogDocument) -> Result<Self, CatalogError> {
        let violations = validation::validate(&doc);
        if !violations.is_empty() {
            return Err(CatalogError::Integrity { violations });
        }

        let questions = doc.questions;
        let question_index = questions
            .iter()
            .enumerate()
            .map(|(i, q)| (q.id.clone(), i))
            .collect();

        let rules: Vec<Rule> = doc
            .rules
            .into_iter()
            .map(|r| {
                let mut rule = r.into_rule();
                rule.phase_split = rule.phase_split.map(|s| s.normalized());
                rule
            })
            .collect();
        let rule_index = rules
            .iter()
            .enumerate()
            .map(|(i, r)| (r.id.clone(), i))
            .collect();

        let mut modes = doc.modes;
        for mode in ComplexityMode::ALL {
            modes
                .entry(mode)
                .or_insert_with(|| default_mode_definition(mode, &questions));
        }

        debug!(
            version = %doc.version,
            questions = questions.len(),
            rules = rules.len(),
            "catalog validated"
        );

        Ok(Self {
            version: doc.version,
            base_days: doc.base_days,
            minimum_days: doc.minimum_days,
            pricing: doc.pricing,
            default_split: doc.default_phase_split.normalized(),
            confidence: doc.confidence,
            questions,
            question_index,
            rules,
            rule_index,
            modes,
            risk_triggers: doc.risk_triggers,
            phase_descriptions: doc.phases,
        })
    }

    /// Convert back to the serialized form.
    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument {
            version: self.version.clone(),
            base_days: self.base_days,
            minimum_days: self.minimum_days,
            pricing: self.pricing.clone(),
            default_phase_split: self.default_split,
            confidence: self.confidence,
            questions: self.questions.clone(),
            rules: self.rules.iter().map(RuleDocument::from).collect(),
            modes: self.modes.clone(),
            risk_triggers: self.risk_triggers.clone(),
            phases: self.phase_descriptions.clone(),
        }
    }

    /// A new catalog identical to this one except for the daily rate.
    ///
    /// The receiver is left untouched.
    pub fn with_daily_rate(&self, daily_rate: f64) -> Result<Self, CatalogError> {
        if !(daily_rate.is_finite() && daily_rate > 0.0) {
            return Err(CatalogError::Integrity {
                violations: vec![IntegrityViolation::InvalidGlobal {
                    field: "pricing.daily_rate".to_string(),
                    reason: format!("must be positive, got {daily_rate}"),
                }],
            });
        }
        let mut out = self.clone();
        out.pricing.daily_rate = daily_rate;
        Ok(out)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn base_days(&self) -> f64 {
        self.base_days
    }

    pub fn minimum_days(&self) -> Option<f64> {
        self.minimum_days
    }

    pub fn pricing(&self) -> &Pricing {
        &self.pricing
    }

    pub fn daily_rate(&self) -> f64 {
        self.pricing.daily_rate
    }

    pub fn default_split(&self) -> &PhaseSplit {
        &self.default_split
    }

    pub fn confidence_thresholds(&self) -> &ConfidenceThresholds {
        &self.confidence
    }

    /// Questions in declaration order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.question_index.get(id).map(|&i| &self.questions[i])
    }

    /// Rules in declaration order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn rule(&self, id: &str) -> Option<&Rule> {
        self.rule_index.get(id).map(|&i| &self.rules[i])
    }

    /// Declaration position of a rule.
    pub fn rule_position(&self, id: &str) -> Option<usize> {
        self.rule_index.get(id).copied()
    }

    pub fn mode(&self, mode: ComplexityMode) -> Option<&ModeDefinition> {
        self.modes.get(&mode)
    }

    /// Risk triggers in declaration order.
    pub fn risk_triggers(&self) -> &[RiskTrigger] {
        &self.risk_triggers
    }

    pub fn phase_description(&self, phase: Phase) -> Option<&str> {
        self.phase_descriptions.get(&phase).map(String::as_str)
    }

    /// Whether `mode` shows the question.
    pub fn is_visible(&self, question: &QuestionId, mode: ComplexityMode) -> bool {
        self.modes
            .get(&mode)
            .is_some_and(|m| m.questions.includes(question))
    }

    /// Questions shown in `mode`, in declaration order.
    pub fn visible_questions(&self, mode: ComplexityMode) -> impl Iterator<Item = &Question> {
        self.questions
            .iter()
            .filter(move |q| self.is_visible(&q.id, mode))
    }

    /// Whether a question's `depends_on` condition holds for `answers`.
    /// Questions without a dependency always apply.
    pub fn dependency_met(&self, question: &Question, answers: &AnswerSet) -> bool {
        match &question.depends_on {
            None => true,
            Some(dep) => answers
                .get(dep.question.as_str())
                .and_then(AnswerValue::as_choice)
                .is_some_and(|v| v == dep.value),
        }
    }

    /// Questions that must be answered for `answers` to be estimated: shown in
    /// the set's mode, not optional, and with their dependency satisfied.
    pub fn required_questions<'a>(
        &'a self,
        answers: &'a AnswerSet,
    ) -> impl Iterator<Item = &'a Question> + 'a {
        self.visible_questions(answers.mode())
            .filter(move |q| !q.optional && self.dependency_met(q, answers))
    }

    /// Advanced-tier questions, the denominator for confidence coverage.
    pub fn advanced_questions(&self) -> impl Iterator<Item = &Question> {
        self.questions
            .iter()
            .filter(|q| q.tier == ComplexityTier::Advanced)
    }

    /// The declared default for a question, as an answer value.
    pub fn default_answer(&self, question: &Question) -> Option<AnswerValue> {
        match &question.kind {
            AnswerKind::SingleSelect { default, .. } => default.clone().map(AnswerValue::Choice),
            AnswerKind::Numeric { default, .. } => default.map(AnswerValue::Number),
            AnswerKind::Boolean { default } => default.map(AnswerValue::Flag),
        }
    }
}

/// Modes the document leaves out: advanced shows everything, quick and
/// basic show the basic tier.
fn default_mode_definition(mode: ComplexityMode, questions: &[Question]) -> ModeDefinition {
    let selection = match mode {
        ComplexityMode::Advanced => QuestionSelection::all(),
        ComplexityMode::Quick | ComplexityMode::Basic => QuestionSelection::List(
            questions
                .iter()
                .filter(|q| q.tier == ComplexityTier::Basic)
                .map(|q| q.id.clone())
                .collect(),
        ),
    };
    ModeDefinition {
        label: mode.to_string(),
        description: String::new(),
        questions: selection,
    }
}
