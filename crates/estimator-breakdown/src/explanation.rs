//! One-line natural-language explanation per rule contribution.
//!
//! ```text
//! Selected 'Complex' for project complexity → +12.0 days
//! 25 for stakeholder interviews (tier ≥ 15) → +2.5 days
//! ```

use estimator_core::models::{Resolution, ResolvedWeight};

use crate::rounding::format_number;

/// Explain how `resolved` produced its days for the rule labelled `label`.
pub fn explain(label: &str, resolved: &ResolvedWeight) -> String {
    let reason = match &resolved.resolution {
        Resolution::Option { option } => format!("Selected '{option}' for {label}"),
        Resolution::Tier { at_least } => {
            format!("Tier ≥ {} for {label}", format_number(*at_least))
        }
        Resolution::PerUnit { quantity, per_unit } => format!(
            "{} × {} days for {label}",
            format_number(*quantity),
            format_number(*per_unit)
        ),
        Resolution::Steps {
            quantity,
            steps,
            per_step,
        } => format!(
            "{} × {} days for {label} ({} in total)",
            format_number(*steps),
            format_number(*per_step),
            format_number(*quantity)
        ),
        Resolution::Flag { value } => {
            format!("Answered '{}' for {label}", if *value { "Yes" } else { "No" })
        }
    };

    // Stepped rules already folded the scale into the quantity.
    let scale = match (&resolved.scale, &resolved.resolution) {
        (Some(scale), resolution) if !matches!(resolution, Resolution::Steps { .. }) => format!(
            ", {} days × {} ({})",
            format_number(resolved.unit_weight),
            format_number(scale.factor),
            scale.question_id
        ),
        _ => String::new(),
    };

    format!("{reason}{scale} → +{:.1} days", resolved.days)
}

#[cfg(test)]
mod tests {
    use estimator_core::models::Scale;
    use estimator_core::QuestionId;

    use super::*;

    fn weight(resolution: Resolution, unit_weight: f64, days: f64) -> ResolvedWeight {
        ResolvedWeight {
            resolution,
            unit_weight,
            scale: None,
            days,
        }
    }

    #[test]
    fn option_explanation() {
        let w = weight(
            Resolution::Option {
                option: "Complex".into(),
            },
            6.5,
            6.5,
        );
        assert_eq!(
            explain("project complexity", &w),
            "Selected 'Complex' for project complexity → +6.5 days"
        );
    }

    #[test]
    fn scaled_explanation_shows_factor() {
        let mut w = weight(
            Resolution::Option {
                option: "Complex".into(),
            },
            2.0,
            8.0,
        );
        w.scale = Some(Scale {
            question_id: QuestionId::from("tables_count"),
            factor: 4.0,
        });
        assert_eq!(
            explain("workflow complexity", &w),
            "Selected 'Complex' for workflow complexity, 2 days × 4 (tables_count) → +8.0 days"
        );
    }
}
