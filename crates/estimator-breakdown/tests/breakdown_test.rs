use std::collections::BTreeMap;

use estimator_breakdown::{project_timeline, BreakdownBuilder};
use estimator_core::catalog::load_catalog;
use estimator_core::models::{AnswerSet, AnswerValue, ComplexityMode, Phase};
use estimator_core::traits::{IBreakdownBuilder, IEstimator, IRiskEvaluator};
use estimator_core::{ConfidenceBand, EstimateResult, RuleCatalog};
use estimator_engine::EstimationEngine;
use estimator_risk::RiskEvaluator;
use test_fixtures::{fixture_path, load_fixture};

fn catalog(name: &str) -> RuleCatalog {
    load_catalog(&fixture_path(&format!("catalogs/{name}"))).unwrap()
}

fn answers(name: &str, mode: ComplexityMode) -> AnswerSet {
    let raw: BTreeMap<String, AnswerValue> = load_fixture(&format!("answers/{name}"));
    AnswerSet::from_pairs(mode, raw)
}

fn run(answers: &AnswerSet, catalog: &RuleCatalog) -> EstimateResult {
    let totals = EstimationEngine::new().estimate(answers, catalog).unwrap();
    let risk = RiskEvaluator::new().evaluate(answers, catalog);
    BreakdownBuilder::new().build(&totals, catalog, &risk)
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ── Totals ──────────────────────────────────────────────────────────────

#[test]
fn quick_scenario_result() {
    let catalog = catalog("scenario.yaml");
    let result = run(&answers("scenario_quick.json", ComplexityMode::Quick), &catalog);

    assert_eq!(result.total_days, 18.0);
    assert_eq!(result.total_cost, 12_600.0);
    assert_eq!(result.display.days, 18.0);
    assert_eq!(result.display.cost, 12_600.0);
    assert_eq!(result.currency, "EUR");
    assert_eq!(result.currency_symbol, "€");
    assert_eq!(result.catalog_version, "scenario-v1");
    assert_eq!(result.confidence, ConfidenceBand::Low);
    assert!(result.risks.is_empty());
}

#[test]
fn advanced_scenario_carries_risk_assessment() {
    let catalog = catalog("scenario.yaml");
    let result = run(
        &answers("scenario_advanced.json", ComplexityMode::Advanced),
        &catalog,
    );

    assert_eq!(result.total_days, 35.0);
    assert_eq!(result.coverage, 1.0);
    assert_eq!(result.confidence, ConfidenceBand::High);
    let risk_questions: Vec<&str> = result.risks.iter().map(|r| r.question_id.as_str()).collect();
    assert_eq!(risk_questions, ["existing_rules", "data_sources", "governance"]);
}

#[test]
fn data_quality_advanced_result() {
    let catalog = catalog("data_quality.yaml");
    let result = run(&answers("dq_advanced.json", ComplexityMode::Advanced), &catalog);

    assert!(approx(result.total_days, 71.0));
    assert_eq!(result.display.days, 71.0);
    assert_eq!(result.display.cost, 49_700.0);
    assert_eq!(result.confidence, ConfidenceBand::High);
}

// ── Phases ──────────────────────────────────────────────────────────────

#[test]
fn phases_follow_enumeration_order() {
    let catalog = catalog("scenario.yaml");
    let result = run(&answers("scenario_quick.json", ComplexityMode::Quick), &catalog);

    let phases: Vec<Phase> = result.phases.iter().map(|p| p.phase).collect();
    assert_eq!(phases, Phase::ALL);
}

#[test]
fn phase_days_reflect_rule_splits() {
    let catalog = catalog("scenario.yaml");
    let result = run(&answers("scenario_quick.json", ComplexityMode::Quick), &catalog);

    // Base, tables and existing rules split evenly; complexity uses 10/40/30/20.
    let exploration = result.phase(Phase::Exploration).unwrap();
    assert!(approx(exploration.days, 1.25 + 0.5 + 0.8 + 0.75));
    assert_eq!(exploration.display.days, 3.3);
    let monitoring = result.phase(Phase::MonitoringSetup).unwrap();
    assert!(approx(monitoring.days, 1.25 + 0.5 + 3.2 + 0.75));
    assert!(approx(monitoring.cost, monitoring.days * 700.0));
}

#[test]
fn phase_days_and_percentages_sum_to_totals() {
    let catalog = catalog("scenario.yaml");
    let result = run(
        &answers("scenario_advanced.json", ComplexityMode::Advanced),
        &catalog,
    );

    let days: f64 = result.phases.iter().map(|p| p.days).sum();
    let cost: f64 = result.phases.iter().map(|p| p.cost).sum();
    let pct: f64 = result.phases.iter().map(|p| p.percentage).sum();
    assert!(approx(days, result.total_days));
    assert!((cost - result.total_cost).abs() < 1e-6);
    assert!(approx(pct, 1.0));
}

#[test]
fn zero_total_gives_zero_percentages() {
    let mut doc = catalog("base_only.yaml").to_document();
    doc.base_days = 0.0;
    let catalog = RuleCatalog::from_document(doc).unwrap();
    let result = run(&AnswerSet::new(ComplexityMode::Advanced), &catalog);

    assert_eq!(result.total_days, 0.0);
    assert!(result.phases.iter().all(|p| p.percentage == 0.0));
    assert!(result.rules.is_empty());
}

// ── Rules ───────────────────────────────────────────────────────────────

#[test]
fn rules_are_ordered_by_days_descending() {
    let catalog = catalog("scenario.yaml");
    let result = run(
        &answers("scenario_advanced.json", ComplexityMode::Advanced),
        &catalog,
    );

    let ids: Vec<&str> = result.rules.iter().map(|r| r.rule_id.as_str()).collect();
    assert_eq!(
        ids,
        [
            "complexity",
            "existing_rules",
            "tables_count",
            "governance",
            "data_sources",
            "historical_analysis"
        ]
    );
}

#[test]
fn ties_keep_declaration_order() {
    let catalog = catalog("scenario.yaml");
    let set = AnswerSet::new(ComplexityMode::Advanced)
        .with("tables_count", 10.0)
        .with("complexity", "Simple")
        .with("existing_rules", "Comprehensive")
        .with("data_sources", "Single")
        .with("governance", true)
        .with("historical_analysis", false);
    let result = run(&set, &catalog);

    // Four zero-day rules stay in the result, in catalog order.
    let zero: Vec<&str> = result
        .rules
        .iter()
        .filter(|r| r.days == 0.0)
        .map(|r| r.rule_id.as_str())
        .collect();
    assert_eq!(
        zero,
        ["existing_rules", "data_sources", "governance", "historical_analysis"]
    );
    assert_eq!(result.rules.len(), 6);
}

#[test]
fn rule_contribution_details() {
    let catalog = catalog("scenario.yaml");
    let result = run(&answers("scenario_quick.json", ComplexityMode::Quick), &catalog);

    let complexity = result.rule("complexity").unwrap();
    assert_eq!(complexity.label, "project complexity");
    assert_eq!(complexity.selected, AnswerValue::choice("Moderate"));
    assert_eq!(complexity.days, 8.0);
    assert!(approx(complexity.share, 8.0 / 18.0));
    assert_eq!(complexity.display_days, 8.0);
    assert_eq!(
        complexity.explanation,
        "Selected 'Moderate' for project complexity → +8.0 days"
    );

    let tables = result.rule("tables_count").unwrap();
    assert_eq!(
        tables.explanation,
        "10 × 0.2 days for Tables in scope → +2.0 days"
    );
}

#[test]
fn boolean_explanation_names_the_answer() {
    let catalog = catalog("scenario.yaml");
    let result = run(
        &answers("scenario_advanced.json", ComplexityMode::Advanced),
        &catalog,
    );
    assert_eq!(
        result.rule("governance").unwrap().explanation,
        "Answered 'No' for governance setup → +3.0 days"
    );
}

#[test]
fn building_twice_gives_equal_results() {
    let catalog = catalog("data_quality.yaml");
    let set = answers("dq_advanced.json", ComplexityMode::Advanced);
    assert_eq!(run(&set, &catalog), run(&set, &catalog));
}

// ── Timeline ────────────────────────────────────────────────────────────

#[test]
fn timeline_for_single_consultant() {
    let catalog = catalog("scenario.yaml");
    let result = run(&answers("scenario_quick.json", ComplexityMode::Quick), &catalog);

    let timeline = project_timeline(&result, 1);
    assert_eq!(timeline.team_size, 1);
    assert_eq!(timeline.sequential_weeks, 3.6);
    assert_eq!(timeline.parallel_weeks, 3.6);
}

#[test]
fn timeline_for_team_divides_weeks() {
    let catalog = catalog("scenario.yaml");
    let result = run(
        &answers("scenario_advanced.json", ComplexityMode::Advanced),
        &catalog,
    );

    let timeline = project_timeline(&result, 2);
    assert_eq!(timeline.sequential_weeks, 7.0);
    assert_eq!(timeline.parallel_weeks, 3.5);
    assert_eq!(project_timeline(&result, 0).team_size, 1);
}

// ── Deviations and methodology ──────────────────────────────────────────

#[test]
fn deviations_reach_the_result_in_declaration_order() {
    let catalog = catalog("data_quality.yaml");
    let result = run(&answers("dq_advanced.json", ComplexityMode::Advanced), &catalog);

    let ids: Vec<&str> = result.deviations.iter().map(|q| q.as_str()).collect();
    assert_eq!(
        ids,
        [
            "tables_count",
            "workflow_complexity",
            "data_sources",
            "rules_count",
            "data_volume",
            "datawash_installation",
            "cloud_platform",
            "compliance_req",
            "historical_analysis",
        ]
    );
}

#[test]
fn phases_carry_catalog_descriptions() {
    let full = catalog("data_quality.yaml");
    let result = run(&answers("dq_advanced.json", ComplexityMode::Advanced), &full);
    assert_eq!(
        result.phase(Phase::Exploration).unwrap().description.as_deref(),
        Some("Profiling, stakeholder interviews and rule discovery")
    );
    assert!(result.phases.iter().all(|p| p.description.is_some()));

    let scenario = catalog("scenario.yaml");
    let result = run(&answers("scenario_quick.json", ComplexityMode::Quick), &scenario);
    assert!(result.phases.iter().all(|p| p.description.is_none()));
}
