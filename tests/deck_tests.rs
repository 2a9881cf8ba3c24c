//! Deck container tests.
//!
//! These tests verify the pool bookkeeping of `Deck<T>`:
//! - available + discarded always equals the catalog
//! - draw-until-empty and the Exhausted state
//! - repopulate from any state

use proptest::prelude::*;

use terrain_tokens::core::{DeckConfig, DrawPolicy};
use terrain_tokens::deck::{Deck, DeckStatus};
use terrain_tokens::tokens::{Terrain, Token, MOUNTAIN_TOKENS};
use terrain_tokens::DeckError;

fn sorted<T: Ord + Clone>(items: impl Iterator<Item = T>) -> Vec<T> {
    let mut items: Vec<T> = items.collect();
    items.sort();
    items
}

/// Available and discarded together must equal the catalog multiset.
fn assert_conserved(deck: &Deck<u8>, catalog: &[u8]) {
    let combined = sorted(deck.available().chain(deck.discarded()).copied());
    assert_eq!(combined, sorted(catalog.iter().copied()));
    assert_eq!(deck.len() + deck.discarded_len(), catalog.len());
}

// =============================================================================
// Draw / Exhaustion
// =============================================================================

/// N draws succeed on a deck of size N, the next one fails.
#[test]
fn test_draw_until_empty() {
    for policy in [DrawPolicy::InOrder, DrawPolicy::Random] {
        let config = DeckConfig::new().with_policy(policy).with_seed(9);
        let mut deck = Deck::new(MOUNTAIN_TOKENS, &config);

        let drawn: Vec<Token> = (0..6).map(|_| deck.draw().unwrap()).collect();

        assert_eq!(deck.status(), DeckStatus::Exhausted);
        assert_eq!(deck.draw(), Err(DeckError::EmptyDeck));
        assert_eq!(deck.discarded_len(), 6);

        let ranks = sorted(drawn.iter().map(Token::rank));
        assert_eq!(ranks, vec![2, 3, 9, 11, 13, 18]);
    }
}

/// A failed draw does not touch either sequence.
#[test]
fn test_failed_draw_is_side_effect_free() {
    let mut deck = Deck::new([Token::new("Cintra", 9, Terrain::Mountain, "Mountain9Cintra")], &DeckConfig::new());
    deck.draw().unwrap();

    let before: Vec<_> = deck.discarded().copied().collect();
    assert!(deck.draw().is_err());
    let after: Vec<_> = deck.discarded().copied().collect();

    assert_eq!(before, after);
    assert!(deck.is_empty());
}

// =============================================================================
// Return
// =============================================================================

/// Returning a token from another catalog is rejected.
#[test]
fn test_return_foreign_token() {
    let mut deck = Deck::new(MOUNTAIN_TOKENS, &DeckConfig::new());
    deck.draw().unwrap();

    let forest = Token::new("Vizima", 7, Terrain::Forest, "Forest7Vizima");
    assert_eq!(deck.return_item(forest), Err(DeckError::ForeignItem));
    assert_eq!(deck.len(), 5);
    assert!(!deck.is_member(&forest));
}

/// Everything drawn can be returned, restoring a full deck.
#[test]
fn test_return_everything() {
    let mut deck = Deck::new(MOUNTAIN_TOKENS, &DeckConfig::new().with_seed(1));
    let drawn: Vec<Token> = (0..6).map(|_| deck.draw().unwrap()).collect();

    for token in drawn {
        deck.return_item(token).unwrap();
    }

    assert_eq!(deck.len(), 6);
    assert_eq!(deck.discarded_len(), 0);
    assert_eq!(deck.status(), DeckStatus::HasStock);
}

// =============================================================================
// Repopulate
// =============================================================================

#[test]
fn test_repopulate_from_every_state() {
    let catalog = [1u8, 2, 3, 4];

    for draws in 0..=catalog.len() {
        let mut deck = Deck::new(catalog, &DeckConfig::new().with_seed(draws as u64));
        for _ in 0..draws {
            deck.draw().unwrap();
        }

        deck.repopulate();

        assert_eq!(deck.len(), catalog.len());
        assert_eq!(deck.discarded_len(), 0);
        assert_conserved(&deck, &catalog);
    }
}

// =============================================================================
// Conservation
// =============================================================================

#[derive(Clone, Debug)]
enum Op {
    Draw,
    Return(usize),
    Repopulate,
    Shuffle,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => Just(Op::Draw),
        3 => (0usize..8).prop_map(Op::Return),
        1 => Just(Op::Repopulate),
        1 => Just(Op::Shuffle),
    ]
}

proptest! {
    #[test]
    fn prop_catalog_is_conserved(
        catalog in prop::collection::vec(0u8..6, 0..10),
        ops in prop::collection::vec(op_strategy(), 0..60),
        seed in any::<u64>(),
        in_order in any::<bool>(),
    ) {
        let policy = if in_order { DrawPolicy::InOrder } else { DrawPolicy::Random };
        let mut deck = Deck::new(catalog.clone(), &DeckConfig::new().with_policy(policy).with_seed(seed));
        let mut held: Vec<u8> = Vec::new();

        for op in ops {
            match op {
                Op::Draw => match deck.draw() {
                    Ok(item) => held.push(item),
                    Err(err) => {
                        prop_assert_eq!(err, DeckError::EmptyDeck);
                        prop_assert!(deck.is_empty());
                    }
                },
                Op::Return(i) if !held.is_empty() => {
                    let item = held.swap_remove(i % held.len());
                    prop_assert!(deck.return_item(item).is_ok());
                }
                Op::Return(_) => {}
                Op::Repopulate => {
                    deck.repopulate();
                    held.clear();
                    prop_assert_eq!(deck.len(), catalog.len());
                }
                Op::Shuffle => deck.shuffle(),
            }

            prop_assert_eq!(deck.len() + deck.discarded_len(), catalog.len());
            prop_assert_eq!(deck.discarded_len(), held.len());
            prop_assert_eq!(
                sorted(deck.available().chain(deck.discarded()).copied()),
                sorted(catalog.iter().copied())
            );
        }
    }
}
