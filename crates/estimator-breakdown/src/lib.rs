//! # estimator-breakdown
//!
//! Turns raw engine totals into the immutable [`EstimateResult`]. Rounding
//! happens here and only for the `display` values; raw numbers pass through.
//!
//! [`EstimateResult`]: estimator_core::EstimateResult

pub mod builder;
pub mod explanation;
pub mod rounding;
pub mod timeline;

pub use builder::BreakdownBuilder;
pub use explanation::explain;
pub use timeline::{project_timeline, ProjectTimeline};
