//! Process-wide catalog reference with atomic replacement.
//!
//! Readers take an [`Arc`] snapshot and keep using it for the whole run; a
//! concurrent [`CatalogHandle::publish`] only affects later snapshots.

use std::path::Path;
use std::sync::Arc;

use arc_swap::ArcSwap;
use tracing::{info, warn};

use super::{load_catalog, RuleCatalog};
use crate::errors::CatalogError;

#[derive(Debug)]
pub struct CatalogHandle {
    inner: ArcSwap<RuleCatalog>,
}

impl CatalogHandle {
    pub fn new(catalog: RuleCatalog) -> Self {
        Self {
            inner: ArcSwap::from_pointee(catalog),
        }
    }

    /// The catalog currently in force.
    pub fn snapshot(&self) -> Arc<RuleCatalog> {
        self.inner.load_full()
    }

    /// Replace the live catalog. Returns the one it replaced.
    pub fn publish(&self, catalog: RuleCatalog) -> Arc<RuleCatalog> {
        self.publish_arc(Arc::new(catalog))
    }

    fn publish_arc(&self, next: Arc<RuleCatalog>) -> Arc<RuleCatalog> {
        let previous = self.inner.swap(Arc::clone(&next));
        info!(
            from = previous.version(),
            to = next.version(),
            "catalog published"
        );
        previous
    }

    /// Load and validate `path`, then swap it in.
    ///
    /// On any error the previous catalog stays live.
    pub fn reload_from_path(&self, path: &Path) -> Result<Arc<RuleCatalog>, CatalogError> {
        let span = crate::catalog_reload_span!(path.display());
        let _guard = span.enter();

        match load_catalog(path) {
            Ok(catalog) => {
                let loaded = Arc::new(catalog);
                self.publish_arc(Arc::clone(&loaded));
                Ok(loaded)
            }
            Err(e) => {
                let kept = self.snapshot();
                warn!(
                    error = %e,
                    kept = kept.version(),
                    "catalog reload rejected"
                );
                Err(e)
            }
        }
    }
}

impl From<RuleCatalog> for CatalogHandle {
    fn from(catalog: RuleCatalog) -> Self {
        Self::new(catalog)
    }
}
