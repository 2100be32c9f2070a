//! Reading catalog documents from disk.
//!
//! The format follows the file extension: `.yaml`/`.yml`, `.json`, `.toml`.

use std::fmt;
use std::path::Path;

use super::document::CatalogDocument;
use super::RuleCatalog;
use crate::errors::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Yaml,
    Json,
    Toml,
}

impl CatalogFormat {
    /// Detect the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            _ => Err(CatalogError::UnsupportedFormat { extension }),
        }
    }
}

impl fmt::Display for CatalogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
            Self::Toml => "toml",
        })
    }
}

/// Parse a document without validating it. `origin` is only used in errors.
pub fn parse_document(
    content: &str,
    format: CatalogFormat,
    origin: &str,
) -> Result<CatalogDocument, CatalogError> {
    let parse_error = |message: String| CatalogError::ParseError {
        path: origin.to_string(),
        message,
    };
    match format {
        CatalogFormat::Yaml => serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string())),
        CatalogFormat::Json => serde_json::from_str(content).map_err(|e| parse_error(e.to_string())),
        CatalogFormat::Toml => toml::from_str(content).map_err(|e| parse_error(e.to_string())),
    }
}

/// Parse and validate a catalog from a string.
pub fn parse_catalog(
    content: &str,
    format: CatalogFormat,
    origin: &str,
) -> Result<RuleCatalog, CatalogError> {
    let doc = parse_document(content, format, origin)?;
    RuleCatalog::from_document(doc)
}

/// Read, parse and validate a catalog file.
pub fn load_catalog(path: &Path) -> Result<RuleCatalog, CatalogError> {
    let format = CatalogFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|_| CatalogError::FileNotFound {
        path: path.display().to_string(),
    })?;
    parse_catalog(&content, format, &path.display().to_string())
}
