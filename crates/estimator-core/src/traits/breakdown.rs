use crate::catalog::RuleCatalog;
use crate::models::{EstimateResult, RawTotals, RiskAssessment};

/// Shapes raw totals into the presentation-ready result.
pub trait IBreakdownBuilder: Send + Sync {
    fn build(
        &self,
        totals: &RawTotals,
        catalog: &RuleCatalog,
        risk: &RiskAssessment,
    ) -> EstimateResult;
}
