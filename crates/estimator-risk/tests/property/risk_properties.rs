use estimator_core::catalog::load_catalog;
use estimator_core::models::{AnswerSet, ComplexityMode, ConfidenceBand, ConfidenceThresholds};
use estimator_core::traits::IRiskEvaluator;
use estimator_risk::RiskEvaluator;
use proptest::prelude::*;
use test_fixtures::fixture_path;

proptest! {
    #[test]
    fn coverage_stays_in_unit_interval(
        sources in any::<bool>(),
        governance in proptest::option::of(any::<bool>()),
        history in proptest::option::of(any::<bool>()),
    ) {
        let catalog = load_catalog(&fixture_path("catalogs/scenario.yaml")).unwrap();
        let mut set = AnswerSet::new(ComplexityMode::Advanced);
        if sources {
            set.insert("data_sources", "Single");
        }
        if let Some(g) = governance {
            set.insert("governance", g);
        }
        if let Some(h) = history {
            set.insert("historical_analysis", h);
        }
        let risk = RiskEvaluator::new().evaluate(&set, &catalog);
        prop_assert!((0.0..=1.0).contains(&risk.coverage));
    }

    #[test]
    fn band_is_monotone_in_coverage(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let thresholds = ConfidenceThresholds::default();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(thresholds.band_for(lo) <= thresholds.band_for(hi));
        prop_assert_eq!(thresholds.band_for(0.0), ConfidenceBand::Low);
    }
}
