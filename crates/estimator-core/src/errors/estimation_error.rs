//! Recoverable per-run failures surfaced to the caller so the UI can re-prompt.

use super::error_code::{self, EstimatorErrorCode};
use crate::models::ComplexityMode;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EstimationError {
    #[error("required question '{question_id}' has no answer ({mode} mode)")]
    MissingRequiredAnswer {
        question_id: String,
        mode: ComplexityMode,
    },

    #[error("invalid answer '{value}' for question '{question_id}': expected {expected}")]
    UnknownOption {
        question_id: String,
        value: String,
        expected: String,
    },

    #[error("answer given for unknown question '{question_id}'")]
    UnknownQuestion { question_id: String },
}

impl EstimationError {
    /// The question the caller should re-prompt for.
    pub fn question_id(&self) -> &str {
        match self {
            Self::MissingRequiredAnswer { question_id, .. }
            | Self::UnknownOption { question_id, .. }
            | Self::UnknownQuestion { question_id } => question_id,
        }
    }
}

impl EstimatorErrorCode for EstimationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingRequiredAnswer { .. } => error_code::MISSING_REQUIRED_ANSWER,
            Self::UnknownOption { .. } => error_code::UNKNOWN_OPTION,
            Self::UnknownQuestion { .. } => error_code::UNKNOWN_QUESTION,
        }
    }
}
