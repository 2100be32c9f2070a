mod breakdown;
mod estimator;
mod risk;

pub use breakdown::IBreakdownBuilder;
pub use estimator::IEstimator;
pub use risk::IRiskEvaluator;
