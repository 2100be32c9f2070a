use estimator_breakdown::BreakdownBuilder;
use estimator_core::catalog::load_catalog;
use estimator_core::models::{AnswerSet, ComplexityMode};
use estimator_core::traits::{IBreakdownBuilder, IEstimator, IRiskEvaluator};
use estimator_engine::EstimationEngine;
use estimator_risk::RiskEvaluator;
use proptest::prelude::*;
use test_fixtures::fixture_path;

const COMPLEXITY: [&str; 3] = ["Simple", "Moderate", "Complex"];
const EXISTING: [&str; 3] = ["None", "Partial", "Comprehensive"];

proptest! {
    #[test]
    fn breakdown_is_consistent_with_totals(
        tables in 1u32..=500,
        complexity in 0usize..3,
        existing in 0usize..3,
        governance in proptest::option::of(any::<bool>()),
    ) {
        let catalog = load_catalog(&fixture_path("catalogs/scenario.yaml")).unwrap();
        let mut set = AnswerSet::new(ComplexityMode::Advanced)
            .with("tables_count", tables)
            .with("complexity", COMPLEXITY[complexity])
            .with("existing_rules", EXISTING[existing]);
        if let Some(g) = governance {
            set.insert("governance", g);
        }

        let totals = EstimationEngine::new().estimate(&set, &catalog).unwrap();
        let risk = RiskEvaluator::new().evaluate(&set, &catalog);
        let result = BreakdownBuilder::new().build(&totals, &catalog, &risk);

        let phase_days: f64 = result.phases.iter().map(|p| p.days).sum();
        prop_assert!((phase_days - result.total_days).abs() < 1e-6);

        let pct: f64 = result.phases.iter().map(|p| p.percentage).sum();
        prop_assert!((pct - 1.0).abs() < 1e-9);

        for pair in result.rules.windows(2) {
            prop_assert!(pair[0].days >= pair[1].days);
        }
        for rule in &result.rules {
            prop_assert!((0.0..=1.0).contains(&rule.share));
            prop_assert!((rule.display_days - rule.days).abs() <= 0.05 + 1e-9);
        }
    }
}
