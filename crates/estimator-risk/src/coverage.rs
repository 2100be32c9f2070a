//! Advanced-question coverage.

use estimator_core::models::AnswerSet;
use estimator_core::RuleCatalog;

/// Fraction of the catalog's advanced-tier questions present in `answers`.
///
/// A catalog with no advanced questions is fully covered.
pub fn advanced_coverage(answers: &AnswerSet, catalog: &RuleCatalog) -> f64 {
    let (answered, total) = catalog
        .advanced_questions()
        .fold((0usize, 0usize), |(answered, total), q| {
            (answered + usize::from(answers.contains(q.id.as_str())), total + 1)
        });
    if total == 0 {
        1.0
    } else {
        answered as f64 / total as f64
    }
}
