//! `dq-estimate validate`

use std::io::Write;
use std::path::Path;

use estimator_core::catalog::load_catalog;
use estimator_core::errors::CatalogError;
use estimator_core::models::ComplexityMode;
use estimator_core::EstimatorError;

use crate::Outcome;

pub fn run<W: Write>(catalog_path: &Path, out: &mut W) -> anyhow::Result<Outcome> {
    match load_catalog(catalog_path) {
        Ok(catalog) => {
            writeln!(
                out,
                "OK {} (version {}): {} questions, {} rules, {} risk triggers",
                catalog_path.display(),
                catalog.version(),
                catalog.questions().len(),
                catalog.rules().len(),
                catalog.risk_triggers().len()
            )?;
            for mode in ComplexityMode::ALL {
                writeln!(
                    out,
                    "  {mode}: {} questions",
                    catalog.visible_questions(mode).count()
                )?;
            }
            Ok(Outcome::Success)
        }
        Err(CatalogError::Integrity { violations }) => {
            writeln!(
                out,
                "INVALID {}: {} violation(s)",
                catalog_path.display(),
                violations.len()
            )?;
            for violation in &violations {
                writeln!(out, "  - {violation}")?;
            }
            Ok(Outcome::Invalid)
        }
        Err(e) => Err(EstimatorError::from(e).into()),
    }
}
