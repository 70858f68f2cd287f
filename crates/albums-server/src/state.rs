//! Shared application state handed to every handler.

use std::sync::Arc;

use albums_store::{AlbumStore, InMemoryAlbumStore};
use albums_types::SeedCatalog;

/// Shared state for the HTTP server.
///
/// Holds the album store behind an `Arc` so each handler task gets a cheap
/// clone. Synchronization lives inside the store; handlers never hold a
/// lock across an `.await`.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AlbumStore>,
}

impl AppState {
    pub fn new(store: impl AlbumStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// State backed by an in-memory store holding `catalog`.
    pub fn seeded(catalog: SeedCatalog) -> Self {
        Self::new(InMemoryAlbumStore::seeded(catalog))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::seeded(SeedCatalog::default())
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
