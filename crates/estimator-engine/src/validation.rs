//! Answer checks run before any weight is resolved.
//!
//! The catalog is trusted; the answer set is not. Nothing here substitutes a
//! default or clamps a value.

use estimator_core::errors::EstimationError;
use estimator_core::models::{AnswerKind, AnswerSet, AnswerValue, Question};
use estimator_core::RuleCatalog;

/// Fail on the first problem: answers are checked in key order, then required
/// questions in declaration order.
pub fn check_answers(answers: &AnswerSet, catalog: &RuleCatalog) -> Result<(), EstimationError> {
    for (id, value) in answers.iter() {
        let question = catalog
            .question(id.as_str())
            .ok_or_else(|| EstimationError::UnknownQuestion {
                question_id: id.to_string(),
            })?;
        check_value(question, value)?;
    }

    if let Some(missing) = catalog
        .required_questions(answers)
        .find(|q| !answers.contains(q.id.as_str()))
    {
        return Err(EstimationError::MissingRequiredAnswer {
            question_id: missing.id.to_string(),
            mode: answers.mode(),
        });
    }
    Ok(())
}

/// Every problem with an answer set, for forms that flag all fields at once.
pub fn validate_all(answers: &AnswerSet, catalog: &RuleCatalog) -> Vec<EstimationError> {
    let mut errors: Vec<EstimationError> = answers
        .iter()
        .filter_map(|(id, value)| match catalog.question(id.as_str()) {
            None => Some(EstimationError::UnknownQuestion {
                question_id: id.to_string(),
            }),
            Some(question) => check_value(question, value).err(),
        })
        .collect();

    errors.extend(
        catalog
            .required_questions(answers)
            .filter(|q| !answers.contains(q.id.as_str()))
            .map(|q| EstimationError::MissingRequiredAnswer {
                question_id: q.id.to_string(),
                mode: answers.mode(),
            }),
    );
    errors
}

/// Check one value against its question's answer kind and bounds.
pub fn check_value(question: &Question, value: &AnswerValue) -> Result<(), EstimationError> {
    let valid = match (&question.kind, value) {
        (AnswerKind::SingleSelect { options, .. }, AnswerValue::Choice(choice)) => {
            options.iter().any(|o| o == choice)
        }
        (AnswerKind::Numeric { min, max, .. }, AnswerValue::Number(n)) => {
            n.is_finite() && *n >= *min && *n <= *max
        }
        (AnswerKind::Boolean { .. }, AnswerValue::Flag(_)) => true,
        _ => false,
    };
    if valid {
        Ok(())
    } else {
        Err(EstimationError::UnknownOption {
            question_id: question.id.to_string(),
            value: value.to_string(),
            expected: question.kind.expectation(),
        })
    }
}
