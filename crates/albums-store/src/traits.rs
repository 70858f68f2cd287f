use albums_types::{Album, AlbumId};

use crate::error::StoreResult;

/// Ordered album collection.
///
/// All implementations must satisfy these invariants:
/// - `list` returns albums in insertion order.
/// - `get` returns the first album in that order whose id matches.
/// - `append` adds exactly one album at the end and never reorders.
/// - Reads do not mutate; repeated reads with no append in between agree.
pub trait AlbumStore: Send + Sync {
    /// Every album, in insertion order.
    fn list(&self) -> StoreResult<Vec<Album>>;

    /// The first album whose id equals `id`.
    ///
    /// Returns `Ok(None)` if no album matches.
    fn get(&self, id: &AlbumId) -> StoreResult<Option<Album>>;

    /// Append an album to the end of the collection and return it.
    fn append(&self, album: Album) -> StoreResult<Album>;

    /// Number of albums in the collection.
    fn len(&self) -> StoreResult<usize>;

    /// Returns `true` if the collection holds no albums.
    fn is_empty(&self) -> StoreResult<bool> {
        self.len().map(|n| n == 0)
    }
}
