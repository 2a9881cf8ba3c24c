//! Crate error type.

use thiserror::Error;

use crate::tokens::{Terrain, TerrainType};

/// Errors raised by decks and the terrain deck manager.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum DeckError {
    /// `draw` was called with nothing available.
    #[error("Deck is empty")]
    EmptyDeck,

    /// The returned item is not part of this deck's catalog.
    #[error("Item does not belong to this deck")]
    ForeignItem,

    /// The returned item belongs to the catalog but has no drawn copy outstanding.
    #[error("Item was not drawn from this deck")]
    NotDrawn,

    /// A token was routed to a deck of a different terrain.
    #[error("Token type mismatch. Expected: {expected}. Found: {found}")]
    TypeMismatch { expected: TerrainType, found: Terrain },

    /// The tag does not name one of Mountain, Forest or Water.
    #[error("Terrain type {0} is not a valid match. Can only use Mountain, Forest and Water")]
    InvalidTerrainType(String),
}

/// Result alias for deck operations.
pub type DeckResult<T> = Result<T, DeckError>;
