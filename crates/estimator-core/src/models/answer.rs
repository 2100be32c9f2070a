use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::mode::ComplexityMode;
use crate::catalog::RuleCatalog;
use crate::types::QuestionId;

/// A selected value. The variant must match the question's [`AnswerKind`].
///
/// [`AnswerKind`]: super::AnswerKind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Flag(bool),
    Number(f64),
    Choice(String),
}

impl AnswerValue {
    pub fn choice(value: impl Into<String>) -> Self {
        AnswerValue::Choice(value.into())
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            AnswerValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_choice(&self) -> Option<&str> {
        match self {
            AnswerValue::Choice(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            AnswerValue::Flag(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerValue::Flag(true) => f.write_str("Yes"),
            AnswerValue::Flag(false) => f.write_str("No"),
            AnswerValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            AnswerValue::Number(n) => write!(f, "{n}"),
            AnswerValue::Choice(s) => f.write_str(s),
        }
    }
}

impl From<bool> for AnswerValue {
    fn from(v: bool) -> Self {
        AnswerValue::Flag(v)
    }
}

impl From<f64> for AnswerValue {
    fn from(v: f64) -> Self {
        AnswerValue::Number(v)
    }
}

impl From<u32> for AnswerValue {
    fn from(v: u32) -> Self {
        AnswerValue::Number(f64::from(v))
    }
}

impl From<&str> for AnswerValue {
    fn from(v: &str) -> Self {
        AnswerValue::Choice(v.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(v: String) -> Self {
        AnswerValue::Choice(v)
    }
}

/// The question → value mapping for one estimation run.
///
/// Keys are unique; unanswered optional questions are simply absent.
/// Ordered so that iteration (and anything derived from it) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnswerSet {
    mode: ComplexityMode,
    answers: BTreeMap<QuestionId, AnswerValue>,
}

impl AnswerSet {
    /// An empty answer set collected under `mode`.
    pub fn new(mode: ComplexityMode) -> Self {
        Self {
            mode,
            answers: BTreeMap::new(),
        }
    }

    /// Build from `(question, value)` pairs. Later duplicates win.
    pub fn from_pairs<I, K, V>(mode: ComplexityMode, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<QuestionId>,
        V: Into<AnswerValue>,
    {
        let answers = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { mode, answers }
    }

    /// Builder-style insert.
    pub fn with(mut self, question: impl Into<QuestionId>, value: impl Into<AnswerValue>) -> Self {
        self.insert(question, value);
        self
    }

    pub fn insert(
        &mut self,
        question: impl Into<QuestionId>,
        value: impl Into<AnswerValue>,
    ) -> Option<AnswerValue> {
        self.answers.insert(question.into(), value.into())
    }

    pub fn remove(&mut self, question: &str) -> Option<AnswerValue> {
        self.answers.remove(question)
    }

    pub fn get(&self, question: &str) -> Option<&AnswerValue> {
        self.answers.get(question)
    }

    pub fn contains(&self, question: &str) -> bool {
        self.answers.contains_key(question)
    }

    pub fn mode(&self) -> ComplexityMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &AnswerValue)> {
        self.answers.iter()
    }

    /// A fresh, empty set for another mode. Answers never carry across modes.
    pub fn reset_for(&self, mode: ComplexityMode) -> Self {
        Self::new(mode)
    }

    /// A copy with every unanswered question that is shown in this set's mode
    /// and declares a default filled in.
    ///
    /// This is an explicit caller step (quick-estimate forms); the engine
    /// never substitutes defaults on its own.
    pub fn with_catalog_defaults(&self, catalog: &RuleCatalog) -> Self {
        let mut out = self.clone();
        for question in catalog.visible_questions(self.mode) {
            if out.contains(question.id.as_str()) {
                continue;
            }
            if let Some(default) = catalog.default_answer(question) {
                out.answers.insert(question.id.clone(), default);
            }
        }
        out
    }
}
