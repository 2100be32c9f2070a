//! `dq-estimate questions`

use std::io::Write;
use std::path::Path;

use estimator_core::catalog::load_catalog;
use estimator_core::models::{AnswerKind, Question};
use estimator_core::EstimatorError;

use crate::cli::QuestionsArgs;
use crate::Outcome;

pub fn run<W: Write>(
    args: &QuestionsArgs,
    catalog_path: &Path,
    out: &mut W,
) -> anyhow::Result<Outcome> {
    let catalog = load_catalog(catalog_path).map_err(EstimatorError::from)?;

    writeln!(
        out,
        "Questions shown in {} mode (catalog {}):",
        args.mode,
        catalog.version()
    )?;
    for question in catalog.visible_questions(args.mode) {
        writeln!(
            out,
            "  {:<24} {} [{}] {}",
            question.id.as_str(),
            question.label,
            describe_kind(&question.kind),
            requirement(question)
        )?;
    }
    Ok(Outcome::Success)
}

fn describe_kind(kind: &AnswerKind) -> String {
    match kind {
        AnswerKind::SingleSelect { options, .. } => format!("one of: {}", options.join(" | ")),
        AnswerKind::Numeric { min, max, .. } => format!("number {min}..={max}"),
        AnswerKind::Boolean { .. } => "yes/no".to_string(),
    }
}

fn requirement(question: &Question) -> String {
    match (&question.depends_on, question.optional) {
        (None, true) => "optional".to_string(),
        (None, false) => "required".to_string(),
        (Some(dep), true) => format!("optional, applies when {} = '{}'", dep.question, dep.value),
        (Some(dep), false) => format!("required when {} = '{}'", dep.question, dep.value),
    }
}
