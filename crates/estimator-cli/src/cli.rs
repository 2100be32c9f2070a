//! Argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use estimator_core::config::{CliOverrides, OutputFormat};
use estimator_core::models::ComplexityMode;

#[derive(Debug, Parser)]
#[command(name = "dq-estimate", version)]
#[command(about = "Estimate effort and cost for data-quality service engagements")]
pub struct Cli {
    /// Directory holding estimator.toml (defaults to the working directory)
    #[arg(long, global = true, env = "ESTIMATOR_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Estimate effort and cost for a file of answers
    Estimate(EstimateArgs),

    /// Check a catalog and report every integrity violation
    Validate(CatalogArgs),

    /// List the questions a mode asks
    Questions(QuestionsArgs),
}

#[derive(Debug, Clone, Args)]
pub struct CatalogArgs {
    /// Catalog file (yaml, json, or toml); falls back to catalog.path in config
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
pub struct EstimateArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Answers file mapping question id to value (yaml, json, or toml)
    #[arg(long)]
    pub answers: PathBuf,

    /// Complexity mode the answers were collected under
    #[arg(long, default_value = "advanced")]
    pub mode: ComplexityMode,

    /// Output format: json, csv, or text
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Override the catalog's daily rate
    #[arg(long)]
    pub daily_rate: Option<f64>,

    /// Consultants working in parallel, for the timeline
    #[arg(long)]
    pub team_size: Option<u32>,

    /// Fill unanswered questions with their catalog defaults first
    #[arg(long)]
    pub with_defaults: bool,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
pub struct QuestionsArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Mode whose questions to list
    #[arg(long, default_value = "advanced")]
    pub mode: ComplexityMode,
}

impl Command {
    /// Flags that take precedence over environment and config file.
    pub fn overrides(&self) -> CliOverrides {
        match self {
            Command::Estimate(args) => CliOverrides {
                catalog_path: args.catalog.catalog.clone(),
                daily_rate: args.daily_rate,
                format: args.format,
                team_size: args.team_size,
            },
            Command::Validate(args) => CliOverrides {
                catalog_path: args.catalog.clone(),
                ..Default::default()
            },
            Command::Questions(args) => CliOverrides {
                catalog_path: args.catalog.catalog.clone(),
                ..Default::default()
            },
        }
    }
}
