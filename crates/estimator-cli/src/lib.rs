//! # estimator-cli
//!
//! Library half of the `dq-estimate` binary so commands can be driven from
//! tests with an in-memory writer.

pub mod answers;
pub mod cli;
pub mod commands;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context};
use estimator_core::errors::{CatalogError, EstimationError, EstimatorErrorCode};
use estimator_core::tracing::init_tracing_with_default;
use estimator_core::{EstimatorConfig, EstimatorError};

use crate::cli::{Cli, Command};

/// Exit status for input the estimator rejected (bad answers, bad catalog).
pub const EXIT_INVALID_INPUT: u8 = 2;

/// How a command finished when it did not fail outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// The command ran but reported problems with its input.
    Invalid,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Invalid => ExitCode::from(EXIT_INVALID_INPUT),
        }
    }
}

/// Load config, initialise logging, and dispatch the subcommand.
pub fn run<W: Write>(cli: Cli, out: &mut W) -> anyhow::Result<Outcome> {
    let root = match cli.config_dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("cannot determine working directory")?,
    };
    let overrides = cli.command.overrides();
    let config = EstimatorConfig::load(&root, Some(&overrides))
        .map_err(EstimatorError::from)
        .with_context(|| format!("loading configuration from {}", root.display()))?;
    init_tracing_with_default(config.logging.effective_level());

    let catalog_path = catalog_path(overrides.catalog_path.as_deref(), &config, &root)?;
    match &cli.command {
        Command::Estimate(args) => commands::estimate::run(args, &catalog_path, &config, out),
        Command::Validate(_) => commands::validate::run(&catalog_path, out),
        Command::Questions(args) => commands::questions::run(args, &catalog_path, out),
    }
}

/// A `--catalog` flag is taken as given; a configured path is relative to
/// the config directory.
fn catalog_path(
    flag: Option<&Path>,
    config: &EstimatorConfig,
    root: &Path,
) -> anyhow::Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path.to_path_buf());
    }
    match &config.catalog.path {
        Some(path) if path.is_absolute() => Ok(path.clone()),
        Some(path) => Ok(root.join(path)),
        None => bail!("no catalog given: pass --catalog or set catalog.path in estimator.toml"),
    }
}

/// Whether the failure is the user's input being rejected rather than an
/// environment or I/O problem.
pub fn is_invalid_input(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause.downcast_ref::<EstimationError>().is_some()
            || matches!(
                cause.downcast_ref::<CatalogError>(),
                Some(CatalogError::Integrity { .. })
            )
    })
}

pub fn exit_code(err: &anyhow::Error) -> ExitCode {
    if is_invalid_input(err) {
        ExitCode::from(EXIT_INVALID_INPUT)
    } else {
        ExitCode::FAILURE
    }
}

/// Message for stderr, with the stable error code when one is available.
pub fn describe(err: &anyhow::Error) -> String {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<EstimatorError>() {
            return e.coded_string();
        }
        if let Some(e) = cause.downcast_ref::<EstimationError>() {
            return e.coded_string();
        }
        if let Some(e) = cause.downcast_ref::<CatalogError>() {
            return e.coded_string();
        }
    }
    format!("{err:#}")
}
