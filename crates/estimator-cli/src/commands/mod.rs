pub mod estimate;
pub mod questions;
pub mod validate;
