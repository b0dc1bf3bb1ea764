//! Shared handler state

use std::sync::Arc;

use orrery_catalog::CatalogStore;

/// State cloned into every handler
///
/// The catalog is read-only, so handlers share it without locking.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
}

impl AppState {
    pub fn new(catalog: CatalogStore) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}
