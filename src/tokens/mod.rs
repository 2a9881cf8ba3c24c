//! Token system: terrains, token records and the static catalog.
//!
//! ## Key Types
//!
//! - `Terrain`: Mountain, Forest or Water
//! - `TerrainType`: a terrain or the `Any` wildcard
//! - `Token`: immutable token record
//! - `TokenCatalog`: lookup over the static tables

pub mod catalog;
pub mod terrain;
pub mod token;

pub use catalog::{tokens_for, TokenCatalog, FOREST_TOKENS, MOUNTAIN_TOKENS, WATER_TOKENS};
pub use terrain::{Terrain, TerrainType};
pub use token::Token;
