//! # estimator-risk
//!
//! Advisory metadata for an estimate. Read-only over the answers and the
//! catalog; never feeds back into the day or cost math.

pub mod coverage;
pub mod evaluator;
pub mod triggers;

pub use evaluator::RiskEvaluator;
