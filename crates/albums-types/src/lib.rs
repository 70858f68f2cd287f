//! Foundation types for the album service.
//!
//! Every other crate in the workspace depends on `albums-types`.
//!
//! # Key Types
//!
//! - [`Album`] — The single record the service manages
//! - [`AlbumId`] — Client-supplied identifier, opaque string on the wire
//! - [`SeedCatalog`] — The fixed set of albums a store starts with
//! - [`DecodeError`] — Structured failure from decoding an album payload

pub mod album;
pub mod error;
pub mod seed;

pub use album::{Album, AlbumId};
pub use error::{DecodeCategory, DecodeError, UnknownSeedCatalog};
pub use seed::SeedCatalog;
