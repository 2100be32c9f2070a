use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::QuestionId;

/// Basic questions are asked in every mode; advanced ones refine the estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityTier {
    #[default]
    Basic,
    Advanced,
}

/// The shape of a valid answer, one variant per resolution strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnswerKind {
    SingleSelect {
        options: Vec<String>,
        #[serde(default)]
        default: Option<String>,
    },
    Numeric {
        min: f64,
        max: f64,
        #[serde(default)]
        default: Option<f64>,
    },
    Boolean {
        #[serde(default)]
        default: Option<bool>,
    },
}

impl AnswerKind {
    pub fn name(&self) -> &'static str {
        match self {
            AnswerKind::SingleSelect { .. } => "single_select",
            AnswerKind::Numeric { .. } => "numeric",
            AnswerKind::Boolean { .. } => "boolean",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, AnswerKind::Numeric { .. })
    }

    /// Options of a select question, empty otherwise.
    pub fn options(&self) -> &[String] {
        match self {
            AnswerKind::SingleSelect { options, .. } => options,
            _ => &[],
        }
    }

    /// Short description of what a valid answer looks like, used in errors.
    pub fn expectation(&self) -> String {
        match self {
            AnswerKind::SingleSelect { options, .. } => {
                let quoted: Vec<String> = options.iter().map(|o| format!("'{o}'")).collect();
                format!("one of {}", quoted.join(", "))
            }
            AnswerKind::Numeric { min, max, .. } => format!("a number between {min} and {max}"),
            AnswerKind::Boolean { .. } => "true or false".to_string(),
        }
    }
}

/// Visibility condition: the question only applies when another select
/// question has a specific answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dependency {
    pub question: QuestionId,
    pub value: String,
}

/// A questionnaire entry. Immutable once loaded into a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub label: String,
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub tier: ComplexityTier,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub tooltip: Option<String>,
    #[serde(default)]
    pub depends_on: Option<Dependency>,
    #[serde(flatten)]
    pub kind: AnswerKind,
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.id)
    }
}
