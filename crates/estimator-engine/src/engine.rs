use estimator_core::errors::EstimationError;
use estimator_core::models::{AnswerSet, RawTotals, RuleShare, Scale};
use estimator_core::traits::IEstimator;
use estimator_core::RuleCatalog;
use tracing::{debug, info};

use crate::allocation;
use crate::resolve;
use crate::validation;

/// Linear additive estimation engine.
///
/// Total effort is the catalog's base days plus the resolved weight of every
/// answered rule, lifted to the catalog minimum when one is set. Stateless:
/// one instance can serve any number of runs and catalogs.
#[derive(Debug, Clone, Copy)]
pub struct EstimationEngine;

impl EstimationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Resolve every answered rule, in catalog declaration order.
    fn rule_shares(
        &self,
        answers: &AnswerSet,
        catalog: &RuleCatalog,
    ) -> Result<Vec<RuleShare>, EstimationError> {
        let mut shares = Vec::new();
        for (index, rule) in catalog.rules().iter().enumerate() {
            // Unanswered optional questions contribute nothing.
            let Some(answer) = answers.get(rule.question.as_str()) else {
                continue;
            };

            let scale = match &rule.scaled_by {
                None => None,
                Some(scale_question) => {
                    let factor = answers
                        .get(scale_question.as_str())
                        .and_then(|v| v.as_number())
                        .ok_or_else(|| EstimationError::MissingRequiredAnswer {
                            question_id: scale_question.to_string(),
                            mode: answers.mode(),
                        })?;
                    Some(Scale {
                        question_id: scale_question.clone(),
                        factor,
                    })
                }
            };

            let resolved = resolve::resolve(rule, answer, scale)?;
            let phases = allocation::split_for(rule, catalog).allocate(resolved.days);
            debug!(
                rule = %rule.id,
                answer = %answer,
                unit_weight = resolved.unit_weight,
                days = resolved.days,
                "rule resolved"
            );

            shares.push(RuleShare {
                rule_id: rule.id.clone(),
                question_id: rule.question.clone(),
                declaration_index: index,
                selected: answer.clone(),
                resolved,
                phases,
            });
        }
        Ok(shares)
    }
}

impl Default for EstimationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl IEstimator for EstimationEngine {
    fn estimate(
        &self,
        answers: &AnswerSet,
        catalog: &RuleCatalog,
    ) -> Result<RawTotals, EstimationError> {
        let span = estimator_core::estimate_span!(catalog.version(), answers.mode());
        let _guard = span.enter();

        validation::check_answers(answers, catalog)?;
        let rule_shares = self.rule_shares(answers, catalog)?;

        let base_days = catalog.base_days();
        let rule_days: f64 = rule_shares.iter().map(|s| s.resolved.days).sum();
        let minimum_top_up_days =
            allocation::minimum_top_up(base_days + rule_days, catalog.minimum_days());
        let total_days = base_days + rule_days + minimum_top_up_days;

        let base_phases = catalog
            .default_split()
            .allocate(base_days + minimum_top_up_days);
        let phase_days = allocation::sum_phases(
            std::iter::once(&base_phases).chain(rule_shares.iter().map(|s| &s.phases)),
        );

        let daily_rate = catalog.daily_rate();
        let total_cost = total_days * daily_rate;

        info!(
            catalog_version = catalog.version(),
            mode = %answers.mode(),
            total_days,
            total_cost,
            rules = rule_shares.len(),
            "estimate computed"
        );

        Ok(RawTotals {
            catalog_version: catalog.version().to_string(),
            mode: answers.mode(),
            base_days,
            minimum_top_up_days,
            base_phases,
            rule_shares,
            phase_days,
            total_days,
            daily_rate,
            total_cost,
        })
    }
}
