use crate::catalog::RuleCatalog;
use crate::models::{AnswerSet, RiskAssessment};

/// Confidence band and risk factors for an answer set.
pub trait IRiskEvaluator: Send + Sync {
    fn evaluate(&self, answers: &AnswerSet, catalog: &RuleCatalog) -> RiskAssessment;
}
