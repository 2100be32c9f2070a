//! Per-user estimation state.

use std::sync::Arc;

use estimator_core::models::{AnswerValue, ComplexityMode};
use estimator_core::{AnswerSet, EstimateResult, EstimatorResult, QuestionId};
use tracing::debug;

use crate::estimator::Estimator;

/// Current mode, answers collected so far, and the last successful result.
///
/// A failed run returns its error and leaves the last result in place so the
/// caller can re-prompt without losing what it showed before.
pub struct EstimationSession {
    estimator: Arc<Estimator>,
    answers: AnswerSet,
    last_result: Option<EstimateResult>,
}

impl EstimationSession {
    pub fn new(estimator: Arc<Estimator>, mode: ComplexityMode) -> Self {
        Self {
            estimator,
            answers: AnswerSet::new(mode),
            last_result: None,
        }
    }

    pub fn mode(&self) -> ComplexityMode {
        self.answers.mode()
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn last_result(&self) -> Option<&EstimateResult> {
        self.last_result.as_ref()
    }

    pub fn set_answer(&mut self, question: impl Into<QuestionId>, value: impl Into<AnswerValue>) {
        self.answers.insert(question, value);
    }

    pub fn clear_answer(&mut self, question: &str) -> Option<AnswerValue> {
        self.answers.remove(question)
    }

    /// Switch mode. Answers and the last result belong to the old mode and
    /// are discarded; switching to the current mode is a no-op.
    pub fn set_mode(&mut self, mode: ComplexityMode) {
        if mode == self.answers.mode() {
            return;
        }
        debug!(from = %self.answers.mode(), to = %mode, "session mode switched");
        self.answers = self.answers.reset_for(mode);
        self.last_result = None;
    }

    /// Fill unanswered questions of the current mode with catalog defaults.
    pub fn apply_defaults(&mut self) -> EstimatorResult<()> {
        let catalog = self.estimator.catalog()?;
        self.answers = self.answers.with_catalog_defaults(&catalog);
        Ok(())
    }

    /// Estimate the current answers. On success the result replaces the
    /// last one; on failure the last one is kept.
    pub fn estimate(&mut self) -> EstimatorResult<&EstimateResult> {
        let result = self.estimator.estimate(&self.answers)?;
        Ok(self.last_result.insert(result))
    }
}
