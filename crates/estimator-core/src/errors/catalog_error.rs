//! Catalog loading and integrity errors.
//!
//! Integrity failures are fatal to the engine and are raised at load/swap
//! time, never mid-calculation.

use super::error_code::{self, EstimatorErrorCode};

/// A single integrity problem found while validating a catalog document.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntegrityViolation {
    #[error("duplicate question id '{id}'")]
    DuplicateQuestion { id: String },

    #[error("duplicate rule id '{id}'")]
    DuplicateRule { id: String },

    #[error("rule '{rule}' references unknown question '{question}'")]
    UnknownQuestionReference { rule: String, question: String },

    #[error("rule '{rule}' uses {weights} weights but question '{question}' is {kind}")]
    KindMismatch {
        rule: String,
        question: String,
        weights: &'static str,
        kind: &'static str,
    },

    #[error("rule '{rule}' has no weight for option '{option}'")]
    MissingOptionWeight { rule: String, option: String },

    #[error("rule '{rule}' weights option '{option}' which question '{question}' does not offer")]
    UnknownOptionWeight {
        rule: String,
        question: String,
        option: String,
    },

    #[error("rule '{rule}' tier table is invalid: {reason}")]
    InvalidTiers { rule: String, reason: String },

    #[error("rule '{rule}' stepped weights are invalid: {reason}")]
    InvalidSteps { rule: String, reason: String },

    #[error("rule '{rule}' has negative weight {value} for '{key}'")]
    NegativeWeight { rule: String, key: String, value: f64 },

    #[error("rule '{rule}' is scaled by '{question}' which is not a numeric question")]
    InvalidScale { rule: String, question: String },

    #[error("phase split for {owner} is invalid (sum {sum}): entries must be non-negative and sum to 1.0")]
    InvalidPhaseSplit { owner: String, sum: f64 },

    #[error("question '{question}' is invalid: {reason}")]
    InvalidQuestion { question: String, reason: String },

    #[error("question '{question}' depends on {reason}")]
    InvalidDependency { question: String, reason: String },

    #[error("mode '{mode}' lists unknown question '{question}'")]
    UnknownModeQuestion { mode: String, question: String },

    #[error("risk trigger #{index} on '{question}' is invalid: {reason}")]
    InvalidRiskTrigger {
        index: usize,
        question: String,
        reason: String,
    },

    #[error("invalid global setting {field}: {reason}")]
    InvalidGlobal { field: String, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog file not found: {path}")]
    FileNotFound { path: String },

    #[error("catalog parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("unsupported catalog format '{extension}' (expected yaml, yml, json, or toml)")]
    UnsupportedFormat { extension: String },

    #[error("catalog failed integrity checks ({} violation(s)): {}", violations.len(), join(violations))]
    Integrity { violations: Vec<IntegrityViolation> },
}

fn join(violations: &[IntegrityViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl EstimatorErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::FileNotFound { .. } => error_code::CATALOG_NOT_FOUND,
            Self::ParseError { .. } | Self::UnsupportedFormat { .. } => {
                error_code::CATALOG_PARSE_ERROR
            }
            Self::Integrity { .. } => error_code::CATALOG_INTEGRITY,
        }
    }
}
