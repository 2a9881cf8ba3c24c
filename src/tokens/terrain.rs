//! Terrain discriminants.
//!
//! `Terrain` is what a token *is*. `TerrainType` is what a caller *asks for*:
//! it adds the `Any` wildcard, which matches every terrain but never selects
//! a deck.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DeckError;

/// Terrain of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Terrain {
    Mountain,
    Forest,
    Water,
}

impl Terrain {
    /// Every terrain, in catalog order.
    pub const ALL: [Terrain; 3] = [Terrain::Mountain, Terrain::Forest, Terrain::Water];

    /// Display name, also the string form accepted by `FromStr`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Terrain::Mountain => "Mountain",
            Terrain::Forest => "Forest",
            Terrain::Water => "Water",
        }
    }

    /// Image key for the face-down side of this terrain's tokens.
    #[must_use]
    pub const fn back_image_key(self) -> &'static str {
        match self {
            Terrain::Mountain => "MountainBack",
            Terrain::Forest => "ForestBack",
            Terrain::Water => "WaterBack",
        }
    }

    /// Position in `Terrain::ALL`.
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Terrain::Mountain => 0,
            Terrain::Forest => 1,
            Terrain::Water => 2,
        }
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Terrain {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TerrainType::from_str(s)?.as_terrain()
    }
}

/// Terrain tag used for matching and deck selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerrainType {
    Mountain,
    Forest,
    Water,
    /// Wildcard. Valid for matching only.
    Any,
}

impl TerrainType {
    /// Does this tag match tokens of `terrain`?
    #[must_use]
    pub fn matches(self, terrain: Terrain) -> bool {
        match self {
            TerrainType::Any => true,
            _ => self == TerrainType::from(terrain),
        }
    }

    /// The concrete terrain this tag selects.
    ///
    /// Fails with `InvalidTerrainType` for `Any`.
    pub fn as_terrain(self) -> Result<Terrain, DeckError> {
        match self {
            TerrainType::Mountain => Ok(Terrain::Mountain),
            TerrainType::Forest => Ok(Terrain::Forest),
            TerrainType::Water => Ok(Terrain::Water),
            TerrainType::Any => Err(DeckError::InvalidTerrainType(self.to_string())),
        }
    }
}

impl From<Terrain> for TerrainType {
    fn from(terrain: Terrain) -> Self {
        match terrain {
            Terrain::Mountain => TerrainType::Mountain,
            Terrain::Forest => TerrainType::Forest,
            Terrain::Water => TerrainType::Water,
        }
    }
}

impl fmt::Display for TerrainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerrainType::Any => f.write_str("Any"),
            TerrainType::Mountain => f.write_str(Terrain::Mountain.name()),
            TerrainType::Forest => f.write_str(Terrain::Forest.name()),
            TerrainType::Water => f.write_str(Terrain::Water.name()),
        }
    }
}

impl FromStr for TerrainType {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Mountain" => Ok(TerrainType::Mountain),
            "Forest" => Ok(TerrainType::Forest),
            "Water" => Ok(TerrainType::Water),
            "Any" => Ok(TerrainType::Any),
            other => Err(DeckError::InvalidTerrainType(other.to_string())),
        }
    }
}
