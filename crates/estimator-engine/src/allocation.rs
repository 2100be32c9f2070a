//! Phase allocation and the minimum-engagement top-up.

use estimator_core::models::{PhaseAmounts, PhaseSplit, Rule};
use estimator_core::RuleCatalog;

/// The rule's own split, or the catalog default.
pub fn split_for<'a>(rule: &'a Rule, catalog: &'a RuleCatalog) -> &'a PhaseSplit {
    rule.phase_split.as_ref().unwrap_or_else(|| catalog.default_split())
}

/// Days needed to lift `subtotal` to the catalog's minimum engagement.
pub fn minimum_top_up(subtotal: f64, minimum: Option<f64>) -> f64 {
    minimum.map_or(0.0, |min| (min - subtotal).max(0.0))
}

/// Sum per-phase allocations.
pub fn sum_phases<'a>(parts: impl IntoIterator<Item = &'a PhaseAmounts>) -> PhaseAmounts {
    parts
        .into_iter()
        .fold(PhaseAmounts::zero(), |acc, p| acc + *p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_up_only_below_minimum() {
        assert_eq!(minimum_top_up(7.0, Some(10.0)), 3.0);
        assert_eq!(minimum_top_up(12.0, Some(10.0)), 0.0);
        assert_eq!(minimum_top_up(7.0, None), 0.0);
    }
}
