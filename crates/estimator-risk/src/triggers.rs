//! Risk trigger matching.

use estimator_core::models::{AnswerValue, RiskTrigger, TriggerCondition};

/// Whether `answer` satisfies the trigger's condition.
///
/// An answer of the wrong kind never matches.
pub fn matches(condition: &TriggerCondition, answer: &AnswerValue) -> bool {
    match (condition, answer) {
        (TriggerCondition::OneOf { values }, AnswerValue::Choice(choice)) => {
            values.iter().any(|v| v == choice)
        }
        (TriggerCondition::Is { flag }, AnswerValue::Flag(value)) => flag == value,
        (TriggerCondition::AtLeast { threshold }, AnswerValue::Number(n)) => n >= threshold,
        (TriggerCondition::AtMost { threshold }, AnswerValue::Number(n)) => n <= threshold,
        _ => false,
    }
}

/// Triggers that fire for the given lookup, in declaration order.
pub fn fired<'a, F>(triggers: &'a [RiskTrigger], answer_for: F) -> impl Iterator<Item = &'a RiskTrigger>
where
    F: Fn(&str) -> Option<&'a AnswerValue> + 'a,
{
    triggers.iter().filter(move |t| {
        answer_for(t.question.as_str()).is_some_and(|a| matches(&t.condition, a))
    })
}
