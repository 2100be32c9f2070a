use std::cmp::Ordering;

use estimator_core::models::{
    DisplayTotals, EstimateResult, Phase, PhaseContribution, RawTotals, RiskAssessment,
    RuleContribution, RuleShare,
};
use estimator_core::traits::IBreakdownBuilder;
use estimator_core::RuleCatalog;
use tracing::debug;

use crate::explanation::explain;
use crate::rounding::{display_cost, display_days};

/// Shapes raw engine totals into an [`EstimateResult`].
///
/// Phases come out in enumeration order. Rules come out by descending days,
/// ties broken by catalog declaration order.
#[derive(Debug, Clone, Copy)]
pub struct BreakdownBuilder;

impl BreakdownBuilder {
    pub fn new() -> Self {
        Self
    }

    fn phases(
        &self,
        totals: &RawTotals,
        catalog: &RuleCatalog,
        precision: u32,
    ) -> Vec<PhaseContribution> {
        let phase_total = totals.phase_days.total();
        Phase::ALL
            .iter()
            .map(|&phase| {
                let days = totals.phase_days.get(phase).max(0.0);
                let cost = days * totals.daily_rate;
                let percentage = if phase_total > 0.0 {
                    days / phase_total
                } else {
                    0.0
                };
                PhaseContribution {
                    phase,
                    days,
                    cost,
                    percentage,
                    display: DisplayTotals {
                        days: display_days(days),
                        cost: display_cost(cost, precision),
                    },
                    description: catalog.phase_description(phase).map(str::to_string),
                }
            })
            .collect()
    }

    fn rules(&self, totals: &RawTotals, catalog: &RuleCatalog) -> Vec<RuleContribution> {
        let mut ordered: Vec<&RuleShare> = totals.rule_shares.iter().collect();
        ordered.sort_by(|a, b| {
            b.resolved
                .days
                .partial_cmp(&a.resolved.days)
                .unwrap_or(Ordering::Equal)
                .then(a.declaration_index.cmp(&b.declaration_index))
        });

        ordered
            .into_iter()
            .map(|share| {
                let label = catalog
                    .rule(share.rule_id.as_str())
                    .map_or_else(|| share.rule_id.to_string(), |r| r.label.clone());
                let days = share.resolved.days;
                let share_of_total = if totals.total_days > 0.0 {
                    days / totals.total_days
                } else {
                    0.0
                };
                RuleContribution {
                    rule_id: share.rule_id.clone(),
                    question_id: share.question_id.clone(),
                    explanation: explain(&label, &share.resolved),
                    label,
                    selected: share.selected.clone(),
                    resolved: share.resolved.clone(),
                    days,
                    share: share_of_total,
                    display_days: display_days(days),
                }
            })
            .collect()
    }
}

impl Default for BreakdownBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl IBreakdownBuilder for BreakdownBuilder {
    fn build(
        &self,
        totals: &RawTotals,
        catalog: &RuleCatalog,
        risk: &RiskAssessment,
    ) -> EstimateResult {
        let span = estimator_core::breakdown_span!(totals.rule_shares.len());
        let _guard = span.enter();

        let pricing = catalog.pricing();
        let phases = self.phases(totals, catalog, pricing.precision);
        let rules = self.rules(totals, catalog);

        debug!(
            phases = phases.len(),
            rules = rules.len(),
            total_days = totals.total_days,
            "breakdown built"
        );

        EstimateResult {
            catalog_version: totals.catalog_version.clone(),
            mode: totals.mode,
            total_days: totals.total_days,
            total_cost: totals.total_cost,
            daily_rate: totals.daily_rate,
            currency: pricing.currency.clone(),
            currency_symbol: pricing.currency_symbol.clone(),
            currency_precision: pricing.precision,
            base_days: totals.base_days,
            minimum_top_up_days: totals.minimum_top_up_days,
            display: DisplayTotals {
                days: display_days(totals.total_days),
                cost: display_cost(totals.total_cost, pricing.precision),
            },
            phases,
            rules,
            confidence: risk.confidence,
            coverage: risk.coverage,
            risks: risk.factors.clone(),
            deviations: risk.deviations.clone(),
        }
    }
}
