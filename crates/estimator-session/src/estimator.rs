//! Estimator: engine → risk evaluator → breakdown builder over one catalog snapshot.

use std::path::Path;
use std::sync::Arc;

use estimator_breakdown::BreakdownBuilder;
use estimator_core::errors::{CatalogError, EstimationError};
use estimator_core::traits::{IBreakdownBuilder, IEstimator, IRiskEvaluator};
use estimator_core::{
    AnswerSet, CatalogHandle, EstimateResult, EstimatorConfig, EstimatorResult, RuleCatalog,
};
use estimator_engine::EstimationEngine;
use estimator_risk::RiskEvaluator;
use tracing::info;

/// The estimation pipeline.
///
/// Every call takes exactly one catalog snapshot, so a reload published
/// mid-run never mixes two catalog versions in one result.
pub struct Estimator {
    catalog: Arc<CatalogHandle>,
    config: EstimatorConfig,
    engine: Box<dyn IEstimator>,
    evaluator: Box<dyn IRiskEvaluator>,
    builder: Box<dyn IBreakdownBuilder>,
}

impl Estimator {
    /// Create an estimator with the default pipeline and no config overrides.
    pub fn new(catalog: Arc<CatalogHandle>) -> Self {
        Self::with_config(catalog, EstimatorConfig::default())
    }

    /// Create an estimator whose catalog snapshots pass through `config`
    /// (daily-rate override) before use.
    pub fn with_config(catalog: Arc<CatalogHandle>, config: EstimatorConfig) -> Self {
        Self {
            catalog,
            config,
            engine: Box::new(EstimationEngine::new()),
            evaluator: Box::new(RiskEvaluator::new()),
            builder: Box::new(BreakdownBuilder::new()),
        }
    }

    /// Replace the estimation engine.
    pub fn set_engine(&mut self, engine: Box<dyn IEstimator>) {
        self.engine = engine;
    }

    /// Replace the risk evaluator.
    pub fn set_evaluator(&mut self, evaluator: Box<dyn IRiskEvaluator>) {
        self.evaluator = evaluator;
    }

    /// Replace the breakdown builder.
    pub fn set_builder(&mut self, builder: Box<dyn IBreakdownBuilder>) {
        self.builder = builder;
    }

    pub fn handle(&self) -> &Arc<CatalogHandle> {
        &self.catalog
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// The live catalog with config pricing applied.
    pub fn catalog(&self) -> EstimatorResult<Arc<RuleCatalog>> {
        self.config.apply_pricing(self.catalog.snapshot())
    }

    /// Run the full pipeline against the live catalog.
    pub fn estimate(&self, answers: &AnswerSet) -> EstimatorResult<EstimateResult> {
        let catalog = self.catalog()?;
        Ok(self.estimate_against(answers, &catalog)?)
    }

    /// Run the full pipeline against a caller-held catalog.
    pub fn estimate_against(
        &self,
        answers: &AnswerSet,
        catalog: &RuleCatalog,
    ) -> Result<EstimateResult, EstimationError> {
        let totals = self.engine.estimate(answers, catalog)?;
        let risk = self.evaluator.evaluate(answers, catalog);
        Ok(self.builder.build(&totals, catalog, &risk))
    }

    /// Load, validate and publish a new catalog. A rejected file leaves the
    /// current catalog live.
    pub fn reload(&self, path: &Path) -> Result<Arc<RuleCatalog>, CatalogError> {
        let catalog = self.catalog.reload_from_path(path)?;
        info!(version = catalog.version(), "estimator catalog reloaded");
        Ok(catalog)
    }
}
