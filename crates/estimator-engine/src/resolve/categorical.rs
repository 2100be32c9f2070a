use std::collections::BTreeMap;

use estimator_core::models::Resolution;

/// Exact option match.
pub(super) fn resolve(weights: &BTreeMap<String, f64>, choice: &str) -> Option<(Resolution, f64)> {
    weights.get(choice).map(|days| {
        (
            Resolution::Option {
                option: choice.to_string(),
            },
            *days,
        )
    })
}
