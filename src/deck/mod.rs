//! Deck system.
//!
//! ## Key Types
//!
//! - `Deck<T>`: generic pool with draw / return / repopulate
//! - `DeckStatus`: `HasStock` or `Exhausted`
//! - `TerrainDeckManager`: per-terrain decks plus the aggregate deck

pub mod container;
pub mod manager;

pub use container::{Deck, DeckStatus};
pub use manager::TerrainDeckManager;
