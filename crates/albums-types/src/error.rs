use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which stage of decoding rejected a payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodeCategory {
    /// The bytes are not valid JSON.
    Syntax,
    /// Valid JSON, but not shaped like an album (missing field, wrong type).
    Data,
    /// The input ended before a complete value was read.
    Eof,
    /// Reading the input failed.
    Io,
}

impl fmt::Display for DecodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Syntax => "syntax",
            Self::Data => "data",
            Self::Eof => "eof",
            Self::Io => "io",
        };
        f.write_str(name)
    }
}

/// A payload could not be decoded into an [`Album`](crate::Album).
///
/// Carries the position of the failure alongside the decoder's own
/// diagnostic so callers can report either.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct DecodeError {
    pub category: DecodeCategory,
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        let category = match err.classify() {
            serde_json::error::Category::Syntax => DecodeCategory::Syntax,
            serde_json::error::Category::Data => DecodeCategory::Data,
            serde_json::error::Category::Eof => DecodeCategory::Eof,
            serde_json::error::Category::Io => DecodeCategory::Io,
        };
        Self {
            category,
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

/// A seed catalogue name did not match any known catalogue.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown seed catalog `{0}` (expected one of: standard, catalog, empty)")]
pub struct UnknownSeedCatalog(pub String);
