//! # estimator-session
//!
//! [`Estimator`] wires engine, risk evaluator and breakdown builder over a
//! [`CatalogHandle`]. [`EstimationSession`] holds one user's answers and last
//! good result.
//!
//! [`CatalogHandle`]: estimator_core::CatalogHandle

pub mod estimator;
pub mod session;

pub use estimator::Estimator;
pub use session::EstimationSession;
