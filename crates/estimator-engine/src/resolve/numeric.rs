//! Numeric strategies: tier lookup, linear coefficient, stepped overhead.

use estimator_core::models::Tier;

/// The highest tier whose threshold is not above `quantity`.
///
/// Tiers are sorted ascending at catalog load, so this is the last match.
pub fn tier_for(tiers: &[Tier], quantity: f64) -> Option<&Tier> {
    tiers.iter().rev().find(|t| t.at_least <= quantity)
}

pub fn linear_days(quantity: f64, per_unit: f64) -> f64 {
    quantity * per_unit
}

/// `ceil(max(quantity - included, 0) / step)`.
pub(super) fn step_count(quantity: f64, included: f64, step: f64) -> f64 {
    let extra = (quantity - included).max(0.0);
    if extra == 0.0 {
        0.0
    } else {
        (extra / step).ceil()
    }
}

/// Days for a stepped rule: every started group of `step` units beyond
/// `included` costs `per_step`.
pub fn stepped_days(quantity: f64, included: f64, step: f64, per_step: f64) -> f64 {
    step_count(quantity, included, step) * per_step
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiers() -> Vec<Tier> {
        vec![
            Tier { at_least: 1.0, days: 0.0 },
            Tier { at_least: 10.0, days: 2.0 },
            Tier { at_least: 50.0, days: 5.0 },
        ]
    }

    #[test]
    fn tier_lookup_takes_nearest_floor() {
        let tiers = tiers();
        assert_eq!(tier_for(&tiers, 37.0).map(|t| t.days), Some(2.0));
        assert_eq!(tier_for(&tiers, 50.0).map(|t| t.days), Some(5.0));
        assert_eq!(tier_for(&tiers, 9.99).map(|t| t.days), Some(0.0));
        assert!(tier_for(&tiers, 0.5).is_none());
    }

    #[test]
    fn stepped_counts_started_groups() {
        assert_eq!(stepped_days(20.0, 20.0, 5.0, 0.5), 0.0);
        assert_eq!(stepped_days(21.0, 20.0, 5.0, 0.5), 0.5);
        assert_eq!(stepped_days(25.0, 20.0, 5.0, 0.5), 0.5);
        assert_eq!(stepped_days(48.0, 20.0, 5.0, 0.5), 3.0);
        assert_eq!(stepped_days(3.0, 20.0, 5.0, 0.5), 0.0);
    }
}
