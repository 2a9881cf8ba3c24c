//! Generic deck container.
//!
//! A `Deck<T>` is a finite pool split into an *available* sequence and a
//! *discarded* sequence. Items leave `available` on `draw`, come back on
//! `return_item`, and `repopulate` resets everything to the construction-time
//! catalog. At all times `available ∪ discarded` equals the catalog as a
//! multiset.
//!
//! Sequences are `im` persistent vectors, so cloning a deck (for undo
//! snapshots) is O(1).

use im::Vector;
use tracing::{debug, trace};

use crate::core::{DeckConfig, DeckRng, DrawPolicy};
use crate::error::{DeckError, DeckResult};

/// Logical state of a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeckStatus {
    /// At least one item is available.
    HasStock,
    /// Nothing left to draw until a return or repopulate.
    Exhausted,
}

/// A finite pool with draw-without-replacement semantics.
///
/// ## Usage
///
/// ```
/// use terrain_tokens::core::DeckConfig;
/// use terrain_tokens::deck::Deck;
/// use terrain_tokens::DeckError;
///
/// let mut deck = Deck::new([1, 2, 3], &DeckConfig::new().in_order());
///
/// assert_eq!(deck.draw(), Ok(1));
/// assert_eq!(deck.draw(), Ok(2));
/// assert_eq!(deck.draw(), Ok(3));
/// assert_eq!(deck.draw(), Err(DeckError::EmptyDeck));
///
/// deck.return_item(2).unwrap();
/// assert_eq!(deck.draw(), Ok(2));
///
/// deck.repopulate();
/// assert_eq!(deck.len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct Deck<T: Clone> {
    /// Construction-time contents, never mutated.
    catalog: Vector<T>,

    /// Items in draw order.
    available: Vector<T>,

    /// Drawn and not yet returned.
    discarded: Vector<T>,

    policy: DrawPolicy,
    rng: DeckRng,
}

impl<T: Clone + PartialEq> Deck<T> {
    /// Build a deck over `items`, seeded from `config`.
    pub fn new(items: impl IntoIterator<Item = T>, config: &DeckConfig) -> Self {
        Self::with_rng(items, config.draw_policy, DeckRng::new(config.seed))
    }

    /// Build a deck with an explicit RNG stream.
    pub fn with_rng(items: impl IntoIterator<Item = T>, policy: DrawPolicy, rng: DeckRng) -> Self {
        let catalog: Vector<T> = items.into_iter().collect();
        Self {
            available: catalog.clone(),
            discarded: Vector::new(),
            catalog,
            policy,
            rng,
        }
    }

    /// Remove and return one available item.
    ///
    /// Fails with `EmptyDeck` if nothing is available, leaving the deck
    /// untouched.
    pub fn draw(&mut self) -> DeckResult<T> {
        let item = match self.policy {
            DrawPolicy::InOrder => self.available.pop_front(),
            DrawPolicy::Random => self
                .rng
                .pick_index(self.available.len())
                .map(|idx| self.available.remove(idx)),
        };

        let item = item.ok_or(DeckError::EmptyDeck)?;
        self.discarded.push_back(item.clone());
        trace!(remaining = self.available.len(), "drew item");
        Ok(item)
    }

    /// Put a drawn item back at the end of the available sequence.
    ///
    /// Fails with `ForeignItem` if the item is not in this deck's catalog,
    /// and with `NotDrawn` if every copy of it is already available.
    pub fn return_item(&mut self, item: T) -> DeckResult<()> {
        if !self.catalog.contains(&item) {
            return Err(DeckError::ForeignItem);
        }
        let idx = self.discarded.index_of(&item).ok_or(DeckError::NotDrawn)?;

        let item = self.discarded.remove(idx);
        self.available.push_back(item);
        trace!(remaining = self.available.len(), "returned item");
        Ok(())
    }

    /// Reset to a fresh copy of the catalog and forget all draws.
    pub fn repopulate(&mut self) {
        self.available = self.catalog.clone();
        self.discarded.clear();
        debug!(size = self.catalog.len(), "repopulated deck");
    }

    /// Shuffle the available items in place.
    ///
    /// Only changes what `InOrder` draws next; `Random` draws are unaffected.
    pub fn shuffle(&mut self) {
        let mut items: Vec<T> = self.available.iter().cloned().collect();
        self.rng.shuffle(&mut items);
        self.available = items.into_iter().collect();
    }

    /// Is the item part of this deck's catalog?
    #[must_use]
    pub fn is_member(&self, item: &T) -> bool {
        self.catalog.contains(item)
    }
}

impl<T: Clone> Deck<T> {
    /// Nothing left to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.available.is_empty()
    }

    #[must_use]
    pub fn status(&self) -> DeckStatus {
        if self.is_empty() {
            DeckStatus::Exhausted
        } else {
            DeckStatus::HasStock
        }
    }

    /// Number of available items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.available.len()
    }

    /// Number of drawn items not yet returned.
    #[must_use]
    pub fn discarded_len(&self) -> usize {
        self.discarded.len()
    }

    /// Size of the construction-time catalog.
    #[must_use]
    pub fn catalog_len(&self) -> usize {
        self.catalog.len()
    }

    #[must_use]
    pub fn policy(&self) -> DrawPolicy {
        self.policy
    }

    /// Available items in draw order (front first).
    pub fn available(&self) -> impl Iterator<Item = &T> {
        self.available.iter()
    }

    /// Drawn items, oldest first.
    pub fn discarded(&self) -> impl Iterator<Item = &T> {
        self.discarded.iter()
    }

    /// Construction-time catalog.
    pub fn catalog(&self) -> impl Iterator<Item = &T> {
        self.catalog.iter()
    }
}
