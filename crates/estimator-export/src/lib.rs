//! # estimator-export
//!
//! Renders an [`EstimateResult`] for files and terminals. Exporters only read
//! the result; nothing here recomputes effort or cost.

pub mod csv;
pub mod json;
pub mod text;

use std::io::Write;
use std::path::Path;

use estimator_breakdown::project_timeline;
use estimator_core::config::OutputFormat;
use estimator_core::errors::ExportError;
use estimator_core::EstimateResult;
use tracing::debug;

pub use csv::{breakdown_csv, phases_csv, rules_csv};
pub use json::{from_json, to_json};
pub use text::text_report;

/// Render `result` in `format`. `team_size` only affects the text timeline.
pub fn render(
    result: &EstimateResult,
    format: OutputFormat,
    team_size: u32,
) -> Result<String, ExportError> {
    let rendered = match format {
        OutputFormat::Json => to_json(result)?,
        OutputFormat::Csv => breakdown_csv(result),
        OutputFormat::Text => text_report(result, &project_timeline(result, team_size)),
    };
    debug!(format = %format, bytes = rendered.len(), "estimate rendered");
    Ok(rendered)
}

/// Render `result` into `writer`.
pub fn write_report<W: Write>(
    writer: &mut W,
    result: &EstimateResult,
    format: OutputFormat,
    team_size: u32,
) -> Result<(), ExportError> {
    let rendered = render(result, format, team_size)?;
    writer.write_all(rendered.as_bytes())?;
    if !rendered.ends_with('\n') {
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Pick the export format from an output file's extension.
pub fn format_for_path(path: &Path) -> Result<OutputFormat, ExportError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    extension
        .parse::<OutputFormat>()
        .map_err(|_| ExportError::UnsupportedFormat {
            format: extension.to_string(),
        })
}
