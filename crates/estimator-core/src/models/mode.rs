use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::QuestionId;

/// Questionnaire depth selected by the user.
///
/// Modes only decide which questions are shown (and therefore required);
/// they never change rule weights.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityMode {
    Quick,
    Basic,
    #[default]
    Advanced,
}

impl ComplexityMode {
    pub const ALL: [ComplexityMode; 3] = [
        ComplexityMode::Quick,
        ComplexityMode::Basic,
        ComplexityMode::Advanced,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ComplexityMode::Quick => "quick",
            ComplexityMode::Basic => "basic",
            ComplexityMode::Advanced => "advanced",
        }
    }
}

impl fmt::Display for ComplexityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplexityMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "quick" => Ok(ComplexityMode::Quick),
            "basic" => Ok(ComplexityMode::Basic),
            "advanced" => Ok(ComplexityMode::Advanced),
            other => Err(format!(
                "unknown complexity mode '{other}' (expected quick, basic, or advanced)"
            )),
        }
    }
}

/// Which questions a mode shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuestionSelection {
    /// The literal string `"all"`.
    All(AllQuestions),
    List(Vec<QuestionId>),
}

/// Marker for `questions = "all"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllQuestions {
    All,
}

impl QuestionSelection {
    pub fn all() -> Self {
        QuestionSelection::All(AllQuestions::All)
    }

    pub fn includes(&self, id: &QuestionId) -> bool {
        match self {
            QuestionSelection::All(_) => true,
            QuestionSelection::List(ids) => ids.contains(id),
        }
    }
}

/// A mode as declared by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeDefinition {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub description: String,
    pub questions: QuestionSelection,
}
