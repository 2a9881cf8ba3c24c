//! Deck configuration.
//!
//! Hosts build a `DeckConfig` at startup and hand it to `Deck::new` or
//! `TerrainDeckManager::new`. The config decides how items leave a deck and
//! which seed drives the random policy.

use serde::{Deserialize, Serialize};

/// How `Deck::draw` selects the next item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawPolicy {
    /// Take the front of the available sequence.
    ///
    /// Returned items go to the back, so they are drawn after everything
    /// still in stock.
    InOrder,
    /// Pick a uniformly random available item.
    #[default]
    Random,
}

/// Configuration shared by every deck a host creates.
///
/// ## Example
///
/// ```
/// use terrain_tokens::core::{DeckConfig, DrawPolicy};
///
/// let config = DeckConfig::new().with_seed(99).in_order();
///
/// assert_eq!(config.draw_policy, DrawPolicy::InOrder);
/// assert_eq!(config.seed, 99);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Draw selection policy.
    pub draw_policy: DrawPolicy,

    /// Seed for the random policy and for `Deck::shuffle`.
    pub seed: u64,
}

impl DeckConfig {
    /// Random draws with seed 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the draw policy.
    #[must_use]
    pub fn with_policy(mut self, policy: DrawPolicy) -> Self {
        self.draw_policy = policy;
        self
    }

    /// Draw front-to-back.
    #[must_use]
    pub fn in_order(self) -> Self {
        self.with_policy(DrawPolicy::InOrder)
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Seed from the thread RNG, for sessions that should not repeat.
    #[must_use]
    pub fn with_entropy_seed(self) -> Self {
        self.with_seed(rand::random())
    }
}
