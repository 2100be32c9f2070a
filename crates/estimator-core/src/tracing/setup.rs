//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Directive used when `ESTIMATOR_LOG` is unset or unparsable.
pub const DEFAULT_DIRECTIVE: &str = "estimator=info";

/// Initialize logging from `ESTIMATOR_LOG`.
///
/// Format: `ESTIMATOR_LOG=estimator_engine=debug,estimator_core=warn`.
/// Falls back to `estimator=info`. Idempotent.
pub fn init_tracing() {
    init_tracing_with_default(DEFAULT_DIRECTIVE);
}

/// Like [`init_tracing`], with a caller-supplied fallback directive
/// (e.g. the `logging.level` config value). `ESTIMATOR_LOG` still wins.
pub fn init_tracing_with_default(fallback: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_new(fallback))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
