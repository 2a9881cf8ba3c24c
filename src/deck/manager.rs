//! Terrain deck manager.
//!
//! The `TerrainDeckManager` owns one deck per terrain plus an independent
//! aggregate deck over all eighteen tokens. It handles:
//! - Per-terrain draws with a single repopulate-and-retry on exhaustion
//! - Routing returned tokens to the deck of their terrain
//! - Refilling one or all per-terrain decks
//!
//! The aggregate deck is a separate pool. Drawing a Mountain token from the
//! Mountain deck does not remove it from the aggregate deck, and refilling
//! the per-terrain decks leaves the aggregate alone.

use tracing::{debug, info, warn};

use crate::core::{DeckConfig, DeckRng};
use crate::error::{DeckError, DeckResult};
use crate::tokens::{Terrain, TerrainType, Token, TokenCatalog};

use super::container::Deck;

const AGGREGATE_CONTEXT: &str = "all";

/// Facade over the four token decks.
///
/// ## Usage
///
/// ```
/// use terrain_tokens::core::DeckConfig;
/// use terrain_tokens::deck::TerrainDeckManager;
/// use terrain_tokens::tokens::{Terrain, TerrainType};
///
/// let mut decks = TerrainDeckManager::new(&DeckConfig::new().with_seed(3));
///
/// let token = decks.draw_token(Terrain::Forest).unwrap();
/// assert_eq!(token.terrain(), Terrain::Forest);
///
/// decks.return_token(token).unwrap();
/// assert!(decks.refill(TerrainType::Any).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct TerrainDeckManager {
    catalog: TokenCatalog,

    /// Indexed by `Terrain::index`.
    decks: [Deck<Token>; 3],

    aggregate: Deck<Token>,
}

impl Default for TerrainDeckManager {
    fn default() -> Self {
        Self::new(&DeckConfig::default())
    }
}

impl TerrainDeckManager {
    /// Build all four decks from the static catalog.
    ///
    /// Each deck draws from its own RNG stream derived from `config.seed`.
    #[must_use]
    pub fn new(config: &DeckConfig) -> Self {
        Self::with_catalog(TokenCatalog::new(), config)
    }

    /// Build the decks from a given catalog.
    #[must_use]
    pub fn with_catalog(catalog: TokenCatalog, config: &DeckConfig) -> Self {
        let root = DeckRng::new(config.seed);
        let deck_for = |terrain: Terrain| {
            Deck::with_rng(
                catalog.tokens(terrain).iter().copied(),
                config.draw_policy,
                root.for_context(terrain.name()),
            )
        };

        let decks = Terrain::ALL.map(deck_for);
        let aggregate = Deck::with_rng(
            catalog.all(),
            config.draw_policy,
            root.for_context(AGGREGATE_CONTEXT),
        );

        Self {
            catalog,
            decks,
            aggregate,
        }
    }

    /// Draw a token of the given terrain.
    ///
    /// An exhausted deck is repopulated once and drawn from again. A second
    /// failure is returned to the caller.
    pub fn draw_token(&mut self, terrain: Terrain) -> DeckResult<Token> {
        let token = draw_or_repopulate(&mut self.decks[terrain.index()], terrain.name())?;
        debug!(%terrain, token = token.name(), "drew token");
        Ok(token)
    }

    /// Return a token to the deck of its terrain.
    ///
    /// Fails with `TypeMismatch` if the catalog files the token under a
    /// different terrain than it declares, and with `ForeignItem` if the
    /// token is not catalogued at all.
    pub fn return_token(&mut self, token: Token) -> DeckResult<()> {
        let terrain = token.terrain();

        if let Some(catalogued) = self.catalog.catalogued_terrain(&token) {
            if catalogued != terrain {
                warn!(token = token.name(), declared = %terrain, %catalogued, "token terrain mismatch");
                return Err(DeckError::TypeMismatch {
                    expected: catalogued.into(),
                    found: terrain,
                });
            }
        }

        self.decks[terrain.index()].return_item(token).map_err(|err| {
            warn!(token = token.name(), %terrain, %err, "rejected returned token");
            err
        })?;
        debug!(%terrain, token = token.name(), "returned token");
        Ok(())
    }

    /// Return a token to an explicitly chosen slot.
    ///
    /// Fails with `TypeMismatch` unless `slot` names exactly the token's
    /// terrain. `Any` is never a valid slot.
    pub fn return_token_to(&mut self, slot: TerrainType, token: Token) -> DeckResult<()> {
        if slot == TerrainType::Any || !slot.matches(token.terrain()) {
            warn!(token = token.name(), %slot, "token does not fit slot");
            return Err(DeckError::TypeMismatch {
                expected: slot,
                found: token.terrain(),
            });
        }
        self.return_token(token)
    }

    /// Repopulate one per-terrain deck.
    ///
    /// Fails with `InvalidTerrainType` for `Any`.
    pub fn refill(&mut self, kind: TerrainType) -> DeckResult<()> {
        let terrain = kind.as_terrain().map_err(|err| {
            warn!(%kind, "refill target is not a deck");
            err
        })?;

        self.decks[terrain.index()].repopulate();
        debug!(%terrain, "refilled deck");
        Ok(())
    }

    /// Repopulate the Mountain, Forest and Water decks.
    ///
    /// The aggregate deck is not touched.
    pub fn refill_all(&mut self) {
        for deck in &mut self.decks {
            deck.repopulate();
        }
        debug!("refilled all terrain decks");
    }

    /// Read-only view of one terrain's deck.
    #[must_use]
    pub fn deck(&self, terrain: Terrain) -> &Deck<Token> {
        &self.decks[terrain.index()]
    }

    /// Number of tokens left in one terrain's deck.
    #[must_use]
    pub fn available(&self, terrain: Terrain) -> usize {
        self.deck(terrain).len()
    }

    /// Read-only view of the aggregate deck.
    #[must_use]
    pub fn aggregate(&self) -> &Deck<Token> {
        &self.aggregate
    }

    /// Draw from the aggregate deck, with the same single retry as
    /// `draw_token`.
    pub fn draw_from_aggregate(&mut self) -> DeckResult<Token> {
        let token = draw_or_repopulate(&mut self.aggregate, AGGREGATE_CONTEXT)?;
        debug!(token = token.name(), "drew token from aggregate deck");
        Ok(token)
    }

    /// Return a token drawn from the aggregate deck.
    pub fn return_to_aggregate(&mut self, token: Token) -> DeckResult<()> {
        self.aggregate.return_item(token)
    }

    pub fn refill_aggregate(&mut self) {
        self.aggregate.repopulate();
    }

    #[must_use]
    pub fn catalog(&self) -> &TokenCatalog {
        &self.catalog
    }
}

fn draw_or_repopulate(deck: &mut Deck<Token>, label: &str) -> DeckResult<Token> {
    match deck.draw() {
        Err(DeckError::EmptyDeck) => {
            info!(deck = label, "deck exhausted, repopulating");
            deck.repopulate();
            deck.draw()
        }
        result => result,
    }
}
