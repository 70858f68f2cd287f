use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DecodeError;

/// Client-supplied album identifier.
///
/// Not validated for format or uniqueness; two albums may share an id.
/// Serializes as a bare JSON string.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlbumId(String);

impl AlbumId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for AlbumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AlbumId({:?})", self.0)
    }
}

impl fmt::Display for AlbumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AlbumId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for AlbumId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for AlbumId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for AlbumId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for AlbumId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A record album.
///
/// All four fields are required when decoding; no field is checked for
/// content (empty strings and negative prices are accepted).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl Album {
    pub fn new(
        id: impl Into<AlbumId>,
        title: impl Into<String>,
        artist: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            price,
        }
    }

    /// Decode an album from a JSON request body.
    pub fn from_json(bytes: &[u8]) -> Result<Self, DecodeError> {
        serde_json::from_slice(bytes).map_err(DecodeError::from)
    }

    /// Returns `true` if this album carries the given identifier.
    pub fn has_id(&self, id: &str) -> bool {
        self.id == *id
    }
}
