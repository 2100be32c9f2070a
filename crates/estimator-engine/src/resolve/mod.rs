//! One resolution strategy per [`RuleWeights`] variant.
//!
//! Answers reaching this point have already been checked against their
//! question, so a mismatch here means the answer and rule disagree on kind.

mod boolean;
mod categorical;
mod numeric;

use estimator_core::errors::EstimationError;
use estimator_core::models::{AnswerValue, Resolution, ResolvedWeight, Rule, RuleWeights, Scale};

pub use numeric::{linear_days, stepped_days, tier_for};

/// Resolve a rule's weight for `answer`, applying the optional scale.
///
/// For stepped rules the scale multiplies the quantity before stepping;
/// for every other variant it multiplies the resolved weight.
pub fn resolve(
    rule: &Rule,
    answer: &AnswerValue,
    scale: Option<Scale>,
) -> Result<ResolvedWeight, EstimationError> {
    let mismatch = || EstimationError::UnknownOption {
        question_id: rule.question.to_string(),
        value: answer.to_string(),
        expected: format!("an answer usable by {} weights", rule.weights.name()),
    };

    let (resolution, unit_weight) = match &rule.weights {
        RuleWeights::Categorical { weights } => {
            let choice = answer.as_choice().ok_or_else(mismatch)?;
            categorical::resolve(weights, choice).ok_or_else(mismatch)?
        }
        RuleWeights::Tiered { tiers } => {
            let quantity = answer.as_number().ok_or_else(mismatch)?;
            let tier = tier_for(tiers, quantity).ok_or_else(mismatch)?;
            (
                Resolution::Tier {
                    at_least: tier.at_least,
                },
                tier.days,
            )
        }
        RuleWeights::Linear { per_unit } => {
            let quantity = answer.as_number().ok_or_else(mismatch)?;
            (
                Resolution::PerUnit {
                    quantity,
                    per_unit: *per_unit,
                },
                linear_days(quantity, *per_unit),
            )
        }
        RuleWeights::Stepped {
            included,
            step,
            per_step,
        } => {
            let answered = answer.as_number().ok_or_else(mismatch)?;
            let quantity = answered * scale.as_ref().map_or(1.0, |s| s.factor);
            let steps = numeric::step_count(quantity, *included, *step);
            let days = steps * per_step;
            return Ok(ResolvedWeight {
                resolution: Resolution::Steps {
                    quantity,
                    steps,
                    per_step: *per_step,
                },
                unit_weight: *per_step,
                scale,
                days,
            });
        }
        RuleWeights::Boolean {
            when_true,
            when_false,
        } => {
            let flag = answer.as_flag().ok_or_else(mismatch)?;
            boolean::resolve(flag, *when_true, *when_false)
        }
    };

    let days = unit_weight * scale.as_ref().map_or(1.0, |s| s.factor);
    Ok(ResolvedWeight {
        resolution,
        unit_weight,
        scale,
        days,
    })
}
