use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use estimator_core::catalog::load_catalog;
use estimator_core::config::PricingConfig;
use estimator_core::errors::EstimationError;
use estimator_core::models::{AnswerSet, AnswerValue, ComplexityMode};
use estimator_core::{CatalogHandle, EstimatorConfig, EstimatorError, RuleCatalog};
use estimator_session::{EstimationSession, Estimator};
use test_fixtures::{fixture_path, load_fixture};

fn catalog(name: &str) -> RuleCatalog {
    load_catalog(&fixture_path(&format!("catalogs/{name}"))).unwrap()
}

fn quick_answers() -> AnswerSet {
    let raw: BTreeMap<String, AnswerValue> = load_fixture("answers/scenario_quick.json");
    AnswerSet::from_pairs(ComplexityMode::Quick, raw)
}

fn estimator() -> Arc<Estimator> {
    let handle = Arc::new(CatalogHandle::new(catalog("scenario.yaml")));
    Arc::new(Estimator::new(handle))
}

/// Scenario catalog with a different version and five more base days.
fn scenario_v2() -> RuleCatalog {
    let mut doc = catalog("scenario.yaml").to_document();
    doc.version = "scenario-v2".to_string();
    doc.base_days += 5.0;
    RuleCatalog::from_document(doc).unwrap()
}

// ── Estimator ───────────────────────────────────────────────────────────

#[test]
fn estimator_runs_full_pipeline() {
    let result = estimator().estimate(&quick_answers()).unwrap();
    assert_eq!(result.total_days, 18.0);
    assert_eq!(result.rules.len(), 3);
    assert_eq!(result.phases.len(), 4);
}

#[test]
fn estimation_errors_pass_through() {
    let answers = AnswerSet::new(ComplexityMode::Quick).with("tables_count", 10.0);
    let err = estimator().estimate(&answers).unwrap_err();
    assert!(matches!(
        err,
        EstimatorError::Estimation(EstimationError::MissingRequiredAnswer { .. })
    ));
}

#[test]
fn config_rate_override_reprices_without_touching_the_catalog() {
    let handle = Arc::new(CatalogHandle::new(catalog("scenario.yaml")));
    let config = EstimatorConfig {
        pricing: PricingConfig {
            daily_rate_override: Some(850.0),
            ..Default::default()
        },
        ..Default::default()
    };
    let estimator = Estimator::with_config(Arc::clone(&handle), config);

    let result = estimator.estimate(&quick_answers()).unwrap();
    assert_eq!(result.daily_rate, 850.0);
    assert_eq!(result.total_cost, 18.0 * 850.0);
    assert_eq!(handle.snapshot().daily_rate(), 700.0);
}

#[test]
fn out_of_range_override_is_rejected() {
    let handle = Arc::new(CatalogHandle::new(catalog("scenario.yaml")));
    let config = EstimatorConfig {
        pricing: PricingConfig {
            daily_rate_override: Some(50_000.0),
            ..Default::default()
        },
        ..Default::default()
    };
    let err = Estimator::with_config(handle, config)
        .estimate(&quick_answers())
        .unwrap_err();
    assert!(matches!(err, EstimatorError::Config(_)));
}

// ── Reload ──────────────────────────────────────────────────────────────

#[test]
fn snapshot_held_across_publish_keeps_old_version() {
    let estimator = estimator();
    let held = estimator.catalog().unwrap();

    estimator.handle().publish(scenario_v2());

    let old = estimator.estimate_against(&quick_answers(), &held).unwrap();
    assert_eq!(old.catalog_version, "scenario-v1");
    assert_eq!(old.total_days, 18.0);

    let new = estimator.estimate(&quick_answers()).unwrap();
    assert_eq!(new.catalog_version, "scenario-v2");
    assert_eq!(new.total_days, 23.0);
}

#[test]
fn results_never_mix_catalog_versions_under_concurrent_reload() {
    let estimator = estimator();
    let stop = Arc::new(AtomicBool::new(false));

    let publisher = {
        let estimator = Arc::clone(&estimator);
        let stop = Arc::clone(&stop);
        thread::spawn(move || {
            let v1 = catalog("scenario.yaml");
            let v2 = scenario_v2();
            let mut flip = false;
            while !stop.load(Ordering::Relaxed) {
                let next = if flip { v1.clone() } else { v2.clone() };
                estimator.handle().publish(next);
                flip = !flip;
            }
        })
    };

    let answers = quick_answers();
    for _ in 0..200 {
        let result = estimator.estimate(&answers).unwrap();
        let expected = match result.catalog_version.as_str() {
            "scenario-v1" => 18.0,
            "scenario-v2" => 23.0,
            other => panic!("unexpected version {other}"),
        };
        assert_eq!(result.total_days, expected);
    }

    stop.store(true, Ordering::Relaxed);
    publisher.join().unwrap();
}

#[test]
fn rejected_reload_keeps_current_catalog() {
    let estimator = estimator();
    let err = estimator.reload(&fixture_path("catalogs/invalid_references.yaml"));
    assert!(err.is_err());
    assert_eq!(estimator.catalog().unwrap().version(), "scenario-v1");
}

#[test]
fn reload_from_file_publishes_new_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    let doc = scenario_v2().to_document();
    std::fs::write(&path, serde_json::to_string(&doc).unwrap()).unwrap();

    let estimator = estimator();
    let reloaded = estimator.reload(&path).unwrap();
    assert_eq!(reloaded.version(), "scenario-v2");
    assert_eq!(
        estimator.estimate(&quick_answers()).unwrap().catalog_version,
        "scenario-v2"
    );
}

// ── Session ─────────────────────────────────────────────────────────────

#[test]
fn session_keeps_last_result_after_failure() {
    let mut session = EstimationSession::new(estimator(), ComplexityMode::Quick);
    for (question, value) in quick_answers().iter() {
        session.set_answer(question.clone(), value.clone());
    }
    let days = session.estimate().unwrap().total_days;
    assert_eq!(days, 18.0);

    session.set_answer("complexity", "Enormous");
    let err = session.estimate().unwrap_err();
    assert!(matches!(
        err,
        EstimatorError::Estimation(EstimationError::UnknownOption { .. })
    ));
    assert_eq!(session.last_result().unwrap().total_days, 18.0);
}

#[test]
fn session_replaces_result_on_success() {
    let mut session = EstimationSession::new(estimator(), ComplexityMode::Quick);
    for (question, value) in quick_answers().iter() {
        session.set_answer(question.clone(), value.clone());
    }
    session.estimate().unwrap();

    session.set_answer("complexity", "Complex");
    session.estimate().unwrap();
    assert_eq!(session.last_result().unwrap().total_days, 22.0);
}

#[test]
fn switching_mode_resets_answers() {
    let mut session = EstimationSession::new(estimator(), ComplexityMode::Quick);
    for (question, value) in quick_answers().iter() {
        session.set_answer(question.clone(), value.clone());
    }
    session.estimate().unwrap();

    session.set_mode(ComplexityMode::Advanced);
    assert_eq!(session.mode(), ComplexityMode::Advanced);
    assert!(session.answers().is_empty());
    assert!(session.last_result().is_none());
}

#[test]
fn switching_to_same_mode_keeps_answers() {
    let mut session = EstimationSession::new(estimator(), ComplexityMode::Quick);
    session.set_answer("tables_count", 10.0);
    session.set_mode(ComplexityMode::Quick);
    assert_eq!(session.answers().len(), 1);
}

#[test]
fn defaults_fill_unanswered_questions() {
    let mut session = EstimationSession::new(estimator(), ComplexityMode::Quick);
    session.set_answer("existing_rules", "None");
    session.apply_defaults().unwrap();

    // tables_count defaults to 1, complexity to Simple: 5 + 0.2 + 4 + 6
    let result = session.estimate().unwrap();
    assert!((result.total_days - 15.2).abs() < 1e-9);
    assert_eq!(session.answers().get("complexity"), Some(&AnswerValue::choice("Simple")));
}

#[test]
fn cleared_answer_is_reported_missing() {
    let mut session = EstimationSession::new(estimator(), ComplexityMode::Quick);
    for (question, value) in quick_answers().iter() {
        session.set_answer(question.clone(), value.clone());
    }
    assert!(session.clear_answer("existing_rules").is_some());
    let err = session.estimate().unwrap_err();
    match err {
        EstimatorError::Estimation(e) => assert_eq!(e.question_id(), "existing_rules"),
        other => panic!("unexpected error {other}"),
    }
}
