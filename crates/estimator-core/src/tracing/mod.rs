//! Logging setup for the estimator.
//! `tracing` with an `EnvFilter`, per-crate log levels via `ESTIMATOR_LOG`.

pub mod setup;
pub mod spans;

pub use setup::{init_tracing, init_tracing_with_default};
