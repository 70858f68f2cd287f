use std::sync::RwLock;

use albums_types::{Album, AlbumId, SeedCatalog};

use crate::error::{StoreError, StoreResult};
use crate::traits::AlbumStore;

/// In-memory, `Vec`-based album store.
///
/// All albums are held behind one `RwLock`: lookups and listings share the
/// read lock, appends take the write lock. Albums are cloned on the way in
/// and out so no caller ever holds a reference into the collection.
pub struct InMemoryAlbumStore {
    albums: RwLock<Vec<Album>>,
}

impl InMemoryAlbumStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::with_albums(Vec::new())
    }

    /// Create a store holding the albums of `catalog`, in seed order.
    pub fn seeded(catalog: SeedCatalog) -> Self {
        Self::with_albums(catalog.albums())
    }

    /// Create a store holding exactly `albums`, in the given order.
    pub fn with_albums(albums: Vec<Album>) -> Self {
        Self {
            albums: RwLock::new(albums),
        }
    }

    fn read_lock(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, Vec<Album>>> {
        self.albums
            .read()
            .map_err(|e| StoreError::Poisoned(e.to_string()))
    }

    fn write_lock(&self) -> StoreResult<std::sync::RwLockWriteGuard<'_, Vec<Album>>> {
        self.albums
            .write()
            .map_err(|e| StoreError::Poisoned(e.to_string()))
    }
}

impl Default for InMemoryAlbumStore {
    fn default() -> Self {
        Self::seeded(SeedCatalog::default())
    }
}

impl AlbumStore for InMemoryAlbumStore {
    fn list(&self) -> StoreResult<Vec<Album>> {
        Ok(self.read_lock()?.clone())
    }

    fn get(&self, id: &AlbumId) -> StoreResult<Option<Album>> {
        let albums = self.read_lock()?;
        Ok(albums.iter().find(|album| album.id == *id).cloned())
    }

    fn append(&self, album: Album) -> StoreResult<Album> {
        let mut albums = self.write_lock()?;
        albums.push(album.clone());
        tracing::debug!(id = %album.id, len = albums.len(), "album appended");
        Ok(album)
    }

    fn len(&self) -> StoreResult<usize> {
        Ok(self.read_lock()?.len())
    }
}

impl std::fmt::Debug for InMemoryAlbumStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct("InMemoryAlbumStore");
        match self.albums.read() {
            Ok(albums) => s.field("album_count", &albums.len()),
            Err(_) => s.field("album_count", &"<poisoned>"),
        };
        s.finish()
    }
}
