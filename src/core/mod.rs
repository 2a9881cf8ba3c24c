//! Core types shared by every deck: configuration and RNG.

pub mod config;
pub mod rng;

pub use config::{DeckConfig, DrawPolicy};
pub use rng::DeckRng;
