//! Answers files: a flat mapping from question id to value.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use estimator_core::catalog::CatalogFormat;
use estimator_core::models::{AnswerSet, AnswerValue, ComplexityMode};

/// Read an answers file in yaml, json or toml, chosen by extension.
pub fn load_answers(path: &Path, mode: ComplexityMode) -> anyhow::Result<AnswerSet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read answers file {}", path.display()))?;
    let format = CatalogFormat::from_path(path)?;
    let pairs = parse_answers(&content, format)
        .with_context(|| format!("invalid answers file {}", path.display()))?;
    Ok(AnswerSet::from_pairs(mode, pairs))
}

pub fn parse_answers(
    content: &str,
    format: CatalogFormat,
) -> anyhow::Result<BTreeMap<String, AnswerValue>> {
    let pairs: BTreeMap<String, AnswerValue> = match format {
        CatalogFormat::Yaml => serde_yaml::from_str(content)?,
        CatalogFormat::Json => serde_json::from_str(content)?,
        CatalogFormat::Toml => toml::from_str(content)?,
    };
    Ok(pairs)
}
