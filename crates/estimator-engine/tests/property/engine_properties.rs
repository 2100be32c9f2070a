use estimator_core::catalog::load_catalog;
use estimator_core::models::{AnswerSet, ComplexityMode};
use estimator_core::traits::IEstimator;
use estimator_core::RuleCatalog;
use estimator_engine::EstimationEngine;
use proptest::prelude::*;
use test_fixtures::fixture_path;

fn scenario() -> RuleCatalog {
    load_catalog(&fixture_path("catalogs/scenario.yaml")).unwrap()
}

fn arb_required() -> impl Strategy<Value = AnswerSet> {
    (
        1u32..=500,
        prop::sample::select(vec!["Simple", "Moderate", "Complex"]),
        prop::sample::select(vec!["None", "Partial", "Comprehensive"]),
    )
        .prop_map(|(tables, complexity, rules)| {
            AnswerSet::new(ComplexityMode::Advanced)
                .with("tables_count", tables)
                .with("complexity", complexity)
                .with("existing_rules", rules)
        })
}

fn arb_optional() -> impl Strategy<Value = Vec<(&'static str, estimator_core::AnswerValue)>> {
    prop::sample::subsequence(
        vec![
            ("data_sources", estimator_core::AnswerValue::choice("Multiple")),
            ("data_sources", estimator_core::AnswerValue::choice("Single")),
            ("governance", false.into()),
            ("governance", true.into()),
            ("historical_analysis", true.into()),
        ],
        0..=3,
    )
}

proptest! {
    #[test]
    fn phases_sum_to_total(base in arb_required(), extra in arb_optional()) {
        let catalog = scenario();
        let mut set = base;
        for (q, v) in extra {
            set.insert(q, v);
        }
        let totals = EstimationEngine::new().estimate(&set, &catalog).unwrap();
        prop_assert!((totals.phase_days.total() - totals.total_days).abs() < 1e-6);
        prop_assert!((totals.total_cost - totals.total_days * 700.0).abs() < 1e-6);
    }

    #[test]
    fn estimate_is_deterministic(base in arb_required()) {
        let catalog = scenario();
        let engine = EstimationEngine::new();
        prop_assert_eq!(
            engine.estimate(&base, &catalog).unwrap(),
            engine.estimate(&base, &catalog).unwrap()
        );
    }

    #[test]
    fn optional_answers_never_decrease_total(
        base in arb_required(),
        question in prop::sample::select(vec!["data_sources", "governance", "historical_analysis"]),
        flag in any::<bool>(),
    ) {
        let catalog = scenario();
        let engine = EstimationEngine::new();
        let before = engine.estimate(&base, &catalog).unwrap().total_days;

        let value: estimator_core::AnswerValue = if question == "data_sources" {
            if flag { "Multiple".into() } else { "Single".into() }
        } else {
            flag.into()
        };
        let after = engine
            .estimate(&base.clone().with(question, value), &catalog)
            .unwrap()
            .total_days;
        prop_assert!(after >= before - 1e-9, "{} < {}", after, before);
    }

    #[test]
    fn omitting_a_required_answer_names_it(
        base in arb_required(),
        dropped in prop::sample::select(vec!["tables_count", "complexity", "existing_rules"]),
    ) {
        let catalog = scenario();
        let mut set = base;
        set.remove(dropped);
        let err = EstimationEngine::new().estimate(&set, &catalog).unwrap_err();
        prop_assert_eq!(err.question_id(), dropped);
    }

    #[test]
    fn linear_rule_scales_with_tables(tables in 1u32..=500) {
        let catalog = scenario();
        let set = AnswerSet::new(ComplexityMode::Quick)
            .with("tables_count", tables)
            .with("complexity", "Simple")
            .with("existing_rules", "Comprehensive");
        let totals = EstimationEngine::new().estimate(&set, &catalog).unwrap();
        prop_assert!((totals.total_days - (9.0 + f64::from(tables) * 0.2)).abs() < 1e-9);
    }
}
