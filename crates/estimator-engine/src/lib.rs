//! # estimator-engine
//!
//! Resolves an answer set against a validated catalog and accumulates raw
//! effort and cost. The model is additive: base days plus one independently
//! auditable contribution per answered rule.

pub mod allocation;
pub mod engine;
pub mod resolve;
pub mod validation;

pub use engine::EstimationEngine;
pub use validation::{check_answers, validate_all};
