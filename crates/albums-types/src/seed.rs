//! Fixed album catalogues a store can be seeded with.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::album::Album;
use crate::error::UnknownSeedCatalog;

/// Which set of albums a fresh store starts with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedCatalog {
    /// Three albums under identifiers `1`, `2`, `3`.
    #[default]
    Standard,
    /// The same three albums under catalogue numbers `48590`, `48583`, `48581`.
    Catalog,
    /// No albums.
    Empty,
}

impl SeedCatalog {
    pub const ALL: [SeedCatalog; 3] = [Self::Standard, Self::Catalog, Self::Empty];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Catalog => "catalog",
            Self::Empty => "empty",
        }
    }

    /// The albums of this catalogue, in seed order.
    pub fn albums(&self) -> Vec<Album> {
        let ids: [&str; 3] = match self {
            Self::Standard => ["1", "2", "3"],
            Self::Catalog => ["48590", "48583", "48581"],
            Self::Empty => return Vec::new(),
        };
        vec![
            Album::new(ids[0], "Blue Train", "John Coltrane", 56.99),
            Album::new(ids[1], "Jeru", "Gerry Mulligan", 17.99),
            Album::new(
                ids[2],
                "Sarah Vaughan and Clifford Brown",
                "Sarah Vaughan",
                39.99,
            ),
        ]
    }
}

impl fmt::Display for SeedCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SeedCatalog {
    type Err = UnknownSeedCatalog;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|catalog| catalog.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownSeedCatalog(s.to_owned()))
    }
}
