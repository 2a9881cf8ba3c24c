//! # terrain-tokens
//!
//! Terrain token catalog and decks for a board-game companion app.
//!
//! ## Design Principles
//!
//! 1. **Tokens are data**: a `Token` is an immutable `Copy` record tagged
//!    with its `Terrain`. The catalog tables are constants.
//!
//! 2. **Decks are generic**: `Deck<T>` knows nothing about terrain. It keeps
//!    `available ∪ discarded` equal to its catalog at all times.
//!
//! 3. **Errors are values**: an exhausted deck returns
//!    `DeckError::EmptyDeck`. The manager matches on it, repopulates once
//!    and retries.
//!
//! ## Modules
//!
//! - `core`: deck configuration and seeded RNG
//! - `tokens`: terrains, tokens, static catalog
//! - `deck`: deck container and terrain deck manager
//! - `error`: `DeckError`

pub mod core;
pub mod deck;
pub mod error;
pub mod tokens;

// Re-export commonly used types
pub use crate::core::{DeckConfig, DeckRng, DrawPolicy};

pub use crate::deck::{Deck, DeckStatus, TerrainDeckManager};

pub use crate::error::{DeckError, DeckResult};

pub use crate::tokens::{
    Terrain, TerrainType, Token, TokenCatalog,
    FOREST_TOKENS, MOUNTAIN_TOKENS, WATER_TOKENS,
};
