//! Ordered album storage for the album service.
//!
//! A store is a single insertion-ordered collection of [`Album`]s. Albums are
//! only ever appended; nothing is updated or removed, and nothing outlives
//! the process.
//!
//! # Storage Backends
//!
//! All backends implement the [`AlbumStore`] trait:
//!
//! - [`InMemoryAlbumStore`] -- `Vec` behind a single `RwLock`
//!
//! # Design Rules
//!
//! 1. Iteration order is insertion order, and lookups scan in that order.
//! 2. Identifiers are not unique; the first match wins.
//! 3. Every read and every append goes through the same lock.
//! 4. A rejected payload never reaches the store, so there is no partial write.
//!
//! [`Album`]: albums_types::Album

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryAlbumStore;
pub use traits::AlbumStore;
