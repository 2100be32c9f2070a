//! Load-time integrity checks.
//!
//! Every violation is collected so an administrator can fix a catalog in one
//! pass. Nothing here runs during estimation.

use std::collections::{HashMap, HashSet};

use super::document::CatalogDocument;
use crate::errors::IntegrityViolation;
use crate::models::{AnswerKind, PhaseSplit, Question, RuleWeights, TriggerCondition};

/// Validate a document, returning every violation found.
pub fn validate(doc: &CatalogDocument) -> Vec<IntegrityViolation> {
    let mut violations = Vec::new();

    check_globals(doc, &mut violations);

    let mut questions: HashMap<&str, &Question> = HashMap::new();
    for q in &doc.questions {
        if questions.insert(q.id.as_str(), q).is_some() {
            violations.push(IntegrityViolation::DuplicateQuestion {
                id: q.id.to_string(),
            });
        }
    }

    for q in &doc.questions {
        check_question(q, &questions, &mut violations);
    }

    let mut rule_ids = HashSet::new();
    for rule in &doc.rules {
        let id = rule.effective_id();
        if !rule_ids.insert(id.clone()) {
            violations.push(IntegrityViolation::DuplicateRule { id: id.to_string() });
        }
        let Some(question) = questions.get(rule.question.as_str()) else {
            violations.push(IntegrityViolation::UnknownQuestionReference {
                rule: id.to_string(),
                question: rule.question.to_string(),
            });
            continue;
        };
        check_rule_weights(id.as_str(), question, &rule.weights, &mut violations);

        if let Some(scale) = &rule.scaled_by {
            let numeric = questions
                .get(scale.as_str())
                .is_some_and(|q| q.kind.is_numeric());
            if !numeric {
                violations.push(IntegrityViolation::InvalidScale {
                    rule: id.to_string(),
                    question: scale.to_string(),
                });
            }
        }
        if let Some(split) = &rule.phase_split {
            check_split(&format!("rule '{id}'"), split, &mut violations);
        }
    }

    for (mode, definition) in &doc.modes {
        if let crate::models::QuestionSelection::List(ids) = &definition.questions {
            for id in ids {
                if !questions.contains_key(id.as_str()) {
                    violations.push(IntegrityViolation::UnknownModeQuestion {
                        mode: mode.to_string(),
                        question: id.to_string(),
                    });
                }
            }
        }
    }

    for (index, trigger) in doc.risk_triggers.iter().enumerate() {
        let reason = match questions.get(trigger.question.as_str()) {
            None => Some("question does not exist".to_string()),
            Some(q) => check_trigger(&trigger.condition, &q.kind),
        };
        if let Some(reason) = reason {
            violations.push(IntegrityViolation::InvalidRiskTrigger {
                index,
                question: trigger.question.to_string(),
                reason,
            });
        }
    }

    violations
}

fn check_globals(doc: &CatalogDocument, out: &mut Vec<IntegrityViolation>) {
    if !(doc.base_days.is_finite() && doc.base_days >= 0.0) {
        out.push(IntegrityViolation::InvalidGlobal {
            field: "base_days".to_string(),
            reason: format!("must be a non-negative number, got {}", doc.base_days),
        });
    }
    if let Some(min) = doc.minimum_days {
        if !(min.is_finite() && min >= 0.0) {
            out.push(IntegrityViolation::InvalidGlobal {
                field: "minimum_days".to_string(),
                reason: format!("must be a non-negative number, got {min}"),
            });
        }
    }
    if !(doc.pricing.daily_rate.is_finite() && doc.pricing.daily_rate > 0.0) {
        out.push(IntegrityViolation::InvalidGlobal {
            field: "pricing.daily_rate".to_string(),
            reason: format!("must be positive, got {}", doc.pricing.daily_rate),
        });
    }
    if doc.pricing.precision > 6 {
        out.push(IntegrityViolation::InvalidGlobal {
            field: "pricing.precision".to_string(),
            reason: format!("at most 6 decimal places, got {}", doc.pricing.precision),
        });
    }
    let c = &doc.confidence;
    if !(0.0..=1.0).contains(&c.low_below)
        || !(0.0..=1.0).contains(&c.high_at_least)
        || c.low_below > c.high_at_least
    {
        out.push(IntegrityViolation::InvalidGlobal {
            field: "confidence".to_string(),
            reason: format!(
                "thresholds must satisfy 0 <= low_below ({}) <= high_at_least ({}) <= 1",
                c.low_below, c.high_at_least
            ),
        });
    }
    check_split("the default split", &doc.default_phase_split, out);
}

fn check_split(owner: &str, split: &PhaseSplit, out: &mut Vec<IntegrityViolation>) {
    if !split.is_valid() {
        out.push(IntegrityViolation::InvalidPhaseSplit {
            owner: owner.to_string(),
            sum: split.sum(),
        });
    }
}

fn check_question(
    q: &Question,
    questions: &HashMap<&str, &Question>,
    out: &mut Vec<IntegrityViolation>,
) {
    let invalid = |reason: String| IntegrityViolation::InvalidQuestion {
        question: q.id.to_string(),
        reason,
    };

    match &q.kind {
        AnswerKind::SingleSelect { options, default } => {
            if options.len() < 2 {
                out.push(invalid("a select question needs at least 2 options".into()));
            }
            let unique: HashSet<&String> = options.iter().collect();
            if unique.len() != options.len() {
                out.push(invalid("options must be unique".into()));
            }
            if let Some(d) = default {
                if !options.contains(d) {
                    out.push(invalid(format!("default '{d}' is not one of the options")));
                }
            }
        }
        AnswerKind::Numeric { min, max, default } => {
            if !(min.is_finite() && max.is_finite()) || min >= max {
                out.push(invalid(format!("min ({min}) must be less than max ({max})")));
            }
            // Quantities feed linear, tiered, stepped and scaled weights,
            // which must never resolve to negative days.
            if *min < 0.0 {
                out.push(invalid(format!("min ({min}) must not be negative")));
            }
            if let Some(d) = default {
                if *d < *min || *d > *max {
                    out.push(invalid(format!("default {d} is outside [{min}, {max}]")));
                }
            }
        }
        AnswerKind::Boolean { .. } => {}
    }

    if let Some(dep) = &q.depends_on {
        let reason = if dep.question == q.id {
            Some("itself".to_string())
        } else {
            match questions.get(dep.question.as_str()) {
                None => Some(format!("unknown question '{}'", dep.question)),
                Some(parent) => match &parent.kind {
                    AnswerKind::SingleSelect { options, .. } if options.contains(&dep.value) => {
                        None
                    }
                    AnswerKind::SingleSelect { .. } => Some(format!(
                        "value '{}' which '{}' does not offer",
                        dep.value, dep.question
                    )),
                    other => Some(format!(
                        "'{}' which is {} (only select questions can gate others)",
                        dep.question,
                        other.name()
                    )),
                },
            }
        };
        if let Some(reason) = reason {
            out.push(IntegrityViolation::InvalidDependency {
                question: q.id.to_string(),
                reason,
            });
        }
    }
}

fn check_rule_weights(
    rule: &str,
    question: &Question,
    weights: &RuleWeights,
    out: &mut Vec<IntegrityViolation>,
) {
    if !weights.accepts(&question.kind) {
        out.push(IntegrityViolation::KindMismatch {
            rule: rule.to_string(),
            question: question.id.to_string(),
            weights: weights.name(),
            kind: question.kind.name(),
        });
        return;
    }

    for (key, value) in weights.values() {
        if !(value.is_finite() && value >= 0.0) {
            out.push(IntegrityViolation::NegativeWeight {
                rule: rule.to_string(),
                key,
                value,
            });
        }
    }

    match (weights, &question.kind) {
        (RuleWeights::Categorical { weights }, AnswerKind::SingleSelect { options, .. }) => {
            for option in options {
                if !weights.contains_key(option) {
                    out.push(IntegrityViolation::MissingOptionWeight {
                        rule: rule.to_string(),
                        option: option.clone(),
                    });
                }
            }
            for key in weights.keys() {
                if !options.contains(key) {
                    out.push(IntegrityViolation::UnknownOptionWeight {
                        rule: rule.to_string(),
                        question: question.id.to_string(),
                        option: key.clone(),
                    });
                }
            }
        }
        (RuleWeights::Tiered { tiers }, AnswerKind::Numeric { min, .. }) => {
            let invalid = |reason: String| IntegrityViolation::InvalidTiers {
                rule: rule.to_string(),
                reason,
            };
            match tiers.first() {
                None => out.push(invalid("at least one tier is required".into())),
                Some(first) if first.at_least > *min => out.push(invalid(format!(
                    "first threshold {} leaves answers from {min} unresolved",
                    first.at_least
                ))),
                Some(_) => {}
            }
            if tiers.windows(2).any(|w| !(w[0].at_least < w[1].at_least)) {
                out.push(invalid("thresholds must be strictly ascending".into()));
            }
        }
        (RuleWeights::Stepped { step, .. }, _) => {
            if !(*step > 0.0) {
                out.push(IntegrityViolation::InvalidSteps {
                    rule: rule.to_string(),
                    reason: format!("step must be positive, got {step}"),
                });
            }
        }
        _ => {}
    }
}

fn check_trigger(condition: &TriggerCondition, kind: &AnswerKind) -> Option<String> {
    match (condition, kind) {
        (TriggerCondition::OneOf { values }, AnswerKind::SingleSelect { options, .. }) => {
            if values.is_empty() {
                return Some("one_of needs at least one value".to_string());
            }
            values
                .iter()
                .find(|v| !options.contains(v))
                .map(|v| format!("value '{v}' is not an option of the question"))
        }
        (TriggerCondition::Is { .. }, AnswerKind::Boolean { .. }) => None,
        (
            TriggerCondition::AtLeast { threshold } | TriggerCondition::AtMost { threshold },
            AnswerKind::Numeric { .. },
        ) => (!threshold.is_finite()).then(|| format!("threshold {threshold} is not finite")),
        (condition, kind) => Some(format!(
            "condition {} cannot apply to a {} question",
            condition_name(condition),
            kind.name()
        )),
    }
}

fn condition_name(condition: &TriggerCondition) -> &'static str {
    match condition {
        TriggerCondition::OneOf { .. } => "one_of",
        TriggerCondition::Is { .. } => "is",
        TriggerCondition::AtLeast { .. } => "at_least",
        TriggerCondition::AtMost { .. } => "at_most",
    }
}
