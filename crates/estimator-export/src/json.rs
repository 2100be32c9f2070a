//! Lossless JSON form of an estimate. Raw values are written as computed, so
//! `from_json(to_json(r))` yields a result equal to `r`.

use estimator_core::errors::ExportError;
use estimator_core::EstimateResult;

pub fn to_json(result: &EstimateResult) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(result)?)
}

pub fn from_json(json: &str) -> Result<EstimateResult, ExportError> {
    Ok(serde_json::from_str(json)?)
}
