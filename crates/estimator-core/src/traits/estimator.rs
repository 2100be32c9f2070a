use crate::catalog::RuleCatalog;
use crate::errors::EstimationError;
use crate::models::{AnswerSet, RawTotals};

/// Turns an answer set into raw effort and cost totals.
pub trait IEstimator: Send + Sync {
    /// Pure: identical inputs always yield identical totals.
    fn estimate(&self, answers: &AnswerSet, catalog: &RuleCatalog)
        -> Result<RawTotals, EstimationError>;
}
