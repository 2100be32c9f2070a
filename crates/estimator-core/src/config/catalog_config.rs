//! Catalog location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path to the catalog file (yaml, json, or toml).
    pub path: Option<PathBuf>,
}
