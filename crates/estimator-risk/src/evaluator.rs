use estimator_core::models::{AnswerSet, RiskAssessment, RiskFactor};
use estimator_core::traits::IRiskEvaluator;
use estimator_core::RuleCatalog;
use tracing::debug;

use crate::coverage::advanced_coverage;
use crate::triggers;

/// Derives the confidence band and risk factors for an answer set.
///
/// Thresholds and triggers come from the catalog; nothing is hard-coded here.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskEvaluator;

impl RiskEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Fired triggers as risk factors, in catalog declaration order.
    pub fn risk_factors(&self, answers: &AnswerSet, catalog: &RuleCatalog) -> Vec<RiskFactor> {
        triggers::fired(catalog.risk_triggers(), |q| answers.get(q))
            .map(|t| RiskFactor {
                question_id: t.question.clone(),
                description: t.risk.clone(),
                mitigation: t.mitigation.clone(),
            })
            .collect()
    }
}

impl IRiskEvaluator for RiskEvaluator {
    fn evaluate(&self, answers: &AnswerSet, catalog: &RuleCatalog) -> RiskAssessment {
        let span = estimator_core::risk_span!(answers.len());
        let _guard = span.enter();

        let coverage = advanced_coverage(answers, catalog);
        let confidence = catalog.confidence_thresholds().band_for(coverage);
        let factors = self.risk_factors(answers, catalog);

        let deviations = catalog
            .questions()
            .iter()
            .filter(|q| {
                answers.get(q.id.as_str()).is_some_and(|answer| {
                    catalog
                        .default_answer(q)
                        .is_some_and(|default| default != *answer)
                })
            })
            .map(|q| q.id.clone())
            .collect();

        debug!(
            coverage,
            confidence = %confidence,
            risks = factors.len(),
            "risk evaluated"
        );

        RiskAssessment {
            confidence,
            coverage,
            factors,
            deviations,
        }
    }
}
