//! Terrain token records.
//!
//! A `Token` is the immutable data behind one drawable tile: its name, its
//! rank on the board, its terrain and the key a rendering surface uses to
//! find its image. Tokens are `Copy`, so decks hold them by value.

use std::fmt;

use serde::Serialize;

use super::terrain::Terrain;

/// One terrain token.
///
/// ## Example
///
/// ```
/// use terrain_tokens::tokens::{Terrain, Token};
///
/// let cintra = Token::new("Cintra", 9, Terrain::Mountain, "Mountain9Cintra");
///
/// assert_eq!(cintra.rank(), 9);
/// assert_eq!(cintra.to_string(), "Cintra (Mountain 9)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    name: &'static str,
    rank: u8,
    terrain: Terrain,
    image_key: &'static str,
}

impl Token {
    /// Create a token.
    #[must_use]
    pub const fn new(
        name: &'static str,
        rank: u8,
        terrain: Terrain,
        image_key: &'static str,
    ) -> Self {
        Self {
            name,
            rank,
            terrain,
            image_key,
        }
    }

    /// Display name, e.g. "Kaer Morhen".
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    #[must_use]
    pub const fn terrain(&self) -> Terrain {
        self.terrain
    }

    /// Key a rendering surface uses to look up the face image.
    #[must_use]
    pub const fn image_key(&self) -> &'static str {
        self.image_key
    }

    /// Key of the face-down image for this token's terrain.
    #[must_use]
    pub const fn back_image_key(&self) -> &'static str {
        self.terrain.back_image_key()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} {})", self.name, self.terrain, self.rank)
    }
}
