//! # estimator-core
//!
//! Foundation crate for the effort estimator.
//! Defines identifiers, the data model, the validated rule catalog, errors,
//! config, tracing setup, and the traits the engine crates implement.
//! Every other crate in the workspace depends on this.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use catalog::{CatalogHandle, RuleCatalog};
pub use config::EstimatorConfig;
pub use errors::{EstimatorError, EstimatorResult};
pub use models::{
    AnswerSet, AnswerValue, ComplexityMode, ConfidenceBand, EstimateResult, Phase, RawTotals,
    RiskAssessment, RiskFactor,
};
pub use types::{QuestionId, RuleId};
