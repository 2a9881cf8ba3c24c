//! Deterministic random number generation for deck draws.
//!
//! Every deck owns a `DeckRng`. The manager derives one stream per deck from
//! a single seed with [`DeckRng::for_context`], so the same seed reproduces
//! the draw sequence of every deck independently of how the others are used.
//!
//! ```
//! use terrain_tokens::core::DeckRng;
//!
//! let root = DeckRng::new(42);
//! let mut mountain = root.for_context("mountain");
//! let mut again = DeckRng::new(42).for_context("mountain");
//!
//! assert_eq!(mountain.pick_index(6), again.pick_index(6));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

/// Seeded RNG used by the random draw policy.
#[derive(Clone, Debug)]
pub struct DeckRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DeckRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Derive an independent stream for a named context.
    ///
    /// The same seed and context always produce the same stream.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);

        Self::new(hasher.finish())
    }

    /// The seed this stream was created from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Pick a uniformly random index in `0..len`.
    ///
    /// Returns `None` when `len` is zero.
    pub fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.inner.gen_range(0..len))
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
