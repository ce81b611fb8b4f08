//! Application state for the web layer.

use std::sync::Arc;

use crate::catalog::Catalog;

/// Shared application state.
///
/// The catalog is loaded once at startup and never mutated, so handlers
/// read it concurrently with no locking.
#[derive(Clone)]
pub struct AppState {
    /// The restroom catalog, fixed for the lifetime of the process
    pub catalog: Arc<Catalog>,
}

impl AppState {
    /// Create a new app state around a loaded catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}
