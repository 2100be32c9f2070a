//! `dq-estimate estimate`

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use estimator_core::catalog::load_catalog;
use estimator_core::{CatalogHandle, EstimatorConfig, EstimatorError};
use estimator_export::{format_for_path, write_report};
use estimator_session::Estimator;
use tracing::info;

use crate::answers::load_answers;
use crate::cli::EstimateArgs;
use crate::Outcome;

pub fn run<W: Write>(
    args: &EstimateArgs,
    catalog_path: &Path,
    config: &EstimatorConfig,
    out: &mut W,
) -> anyhow::Result<Outcome> {
    let catalog = load_catalog(catalog_path).map_err(EstimatorError::from)?;
    let estimator = Estimator::with_config(Arc::new(CatalogHandle::new(catalog)), config.clone());

    let mut answers = load_answers(&args.answers, args.mode)?;
    if args.with_defaults {
        answers = answers.with_catalog_defaults(&*estimator.catalog()?);
    }

    let result = estimator.estimate(&answers)?;
    let team_size = config.output.effective_team_size();

    match &args.output {
        Some(path) => {
            // An explicit --format wins over the file extension.
            let format = match args.format {
                Some(format) => format,
                None => format_for_path(path).map_err(EstimatorError::from)?,
            };
            let mut file = std::fs::File::create(path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            write_report(&mut file, &result, format, team_size).map_err(EstimatorError::from)?;
            info!(path = %path.display(), %format, "estimate written");
            writeln!(
                out,
                "{:.1} days, {}{:.2} written to {}",
                result.display.days,
                result.currency_symbol,
                result.display.cost,
                path.display()
            )?;
        }
        None => {
            let format = config.output.effective_format();
            write_report(out, &result, format, team_size).map_err(EstimatorError::from)?;
        }
    }
    Ok(Outcome::Success)
}
