//! Static token tables and the catalog registry.
//!
//! The three tables are process-wide constants. Decks copy tokens out of
//! them at construction, so nothing can mutate a table after startup.

use rustc_hash::FxHashMap;

use super::terrain::Terrain;
use super::token::Token;

pub const MOUNTAIN_TOKENS: [Token; 6] = [
    Token::new("Hengfors", 2, Terrain::Mountain, "Mountain2Hengfors"),
    Token::new("Kaer Morhen", 3, Terrain::Mountain, "Mountain3KaerMorhen"),
    Token::new("Cintra", 9, Terrain::Mountain, "Mountain9Cintra"),
    Token::new("Beauclair", 11, Terrain::Mountain, "Mountain11Beauclair"),
    Token::new("Doldeth", 13, Terrain::Mountain, "Mountain13Doldeth"),
    Token::new("Ard Modron", 18, Terrain::Mountain, "Mountain18ArdModron"),
];

pub const FOREST_TOKENS: [Token; 6] = [
    Token::new("Novigrad", 6, Terrain::Forest, "Forest6Novigrad"),
    Token::new("Vizima", 7, Terrain::Forest, "Forest7Vizima"),
    Token::new("Vengerberg", 8, Terrain::Forest, "Forest8Vengerberg"),
    Token::new("Haern Caduch", 10, Terrain::Forest, "Forest10HaernCaduch"),
    Token::new("Dhuwod", 16, Terrain::Forest, "Forest16Dhuwod"),
    Token::new("Stygga", 17, Terrain::Forest, "Forest17Stygga"),
];

pub const WATER_TOKENS: [Token; 6] = [
    Token::new("Kaer Seren", 1, Terrain::Water, "Water1KaerSeren"),
    Token::new("Ban Ard", 4, Terrain::Water, "Water4BanArd"),
    Token::new("Cidaris", 5, Terrain::Water, "Water5Cidaris"),
    Token::new("Glenmore", 12, Terrain::Water, "Water12Glenmore"),
    Token::new("Loc Ichaer", 14, Terrain::Water, "Water14LocIchaer"),
    Token::new("Gorthur Guaed", 15, Terrain::Water, "Water15GorthurGuaed"),
];

/// The static table for a terrain.
#[must_use]
pub const fn tokens_for(terrain: Terrain) -> &'static [Token] {
    match terrain {
        Terrain::Mountain => &MOUNTAIN_TOKENS,
        Terrain::Forest => &FOREST_TOKENS,
        Terrain::Water => &WATER_TOKENS,
    }
}

/// Lookup over the static token tables.
///
/// Indexes tokens by image key and by name. The image key is what a
/// rendering surface holds, and it is also how the deck manager checks which
/// terrain a token was actually catalogued under.
///
/// ## Example
///
/// ```
/// use terrain_tokens::tokens::{Terrain, TokenCatalog};
///
/// let catalog = TokenCatalog::new();
///
/// let token = catalog.by_image_key("Forest7Vizima").unwrap();
/// assert_eq!(token.name(), "Vizima");
/// assert_eq!(catalog.tokens(Terrain::Forest).len(), 6);
/// ```
#[derive(Clone, Debug)]
pub struct TokenCatalog {
    by_image_key: FxHashMap<&'static str, Token>,
    by_name: FxHashMap<&'static str, Token>,
}

impl Default for TokenCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenCatalog {
    /// Index the three static tables.
    #[must_use]
    pub fn new() -> Self {
        let mut by_image_key = FxHashMap::default();
        let mut by_name = FxHashMap::default();

        for token in Terrain::ALL.iter().flat_map(|&t| tokens_for(t)) {
            by_image_key.insert(token.image_key(), *token);
            by_name.insert(token.name(), *token);
        }

        Self {
            by_image_key,
            by_name,
        }
    }

    /// The table for one terrain, in catalog order.
    #[must_use]
    pub fn tokens(&self, terrain: Terrain) -> &'static [Token] {
        tokens_for(terrain)
    }

    /// Every token: Mountain, then Forest, then Water.
    pub fn all(&self) -> impl Iterator<Item = Token> {
        Terrain::ALL
            .into_iter()
            .flat_map(|t| tokens_for(t).iter().copied())
    }

    #[must_use]
    pub fn by_image_key(&self, image_key: &str) -> Option<Token> {
        self.by_image_key.get(image_key).copied()
    }

    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<Token> {
        self.by_name.get(name).copied()
    }

    /// Terrain the catalog files this token under, looked up by image key.
    ///
    /// `None` if the image key is unknown.
    #[must_use]
    pub fn catalogued_terrain(&self, token: &Token) -> Option<Terrain> {
        self.by_image_key(token.image_key()).map(|t| t.terrain())
    }

    /// Number of catalogued tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_image_key.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_image_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        let catalog = TokenCatalog::new();

        for terrain in Terrain::ALL {
            assert_eq!(catalog.tokens(terrain).len(), 6);
        }
        assert_eq!(catalog.len(), 18);
        assert_eq!(catalog.all().count(), 18);
    }

    #[test]
    fn test_mountain_ranks() {
        let ranks: Vec<u8> = MOUNTAIN_TOKENS.iter().map(Token::rank).collect();
        assert_eq!(ranks, vec![2, 3, 9, 11, 13, 18]);
    }

    #[test]
    fn test_ranks_cover_one_to_eighteen() {
        let catalog = TokenCatalog::new();
        let mut ranks: Vec<u8> = catalog.all().map(|t| t.rank()).collect();
        ranks.sort_unstable();
        assert_eq!(ranks, (1..=18).collect::<Vec<u8>>());
    }

    #[test]
    fn test_tables_are_homogeneous() {
        for terrain in Terrain::ALL {
            assert!(tokens_for(terrain).iter().all(|t| t.terrain() == terrain));
        }
    }

    #[test]
    fn test_all_order() {
        let catalog = TokenCatalog::new();
        let all: Vec<Token> = catalog.all().collect();

        assert_eq!(all[0], MOUNTAIN_TOKENS[0]);
        assert_eq!(all[6], FOREST_TOKENS[0]);
        assert_eq!(all[17], WATER_TOKENS[5]);
    }

    #[test]
    fn test_lookup() {
        let catalog = TokenCatalog::new();

        assert_eq!(catalog.by_name("Glenmore"), Some(WATER_TOKENS[3]));
        assert_eq!(catalog.by_image_key("Mountain3KaerMorhen"), Some(MOUNTAIN_TOKENS[1]));
        assert_eq!(catalog.by_name("Oxenfurt"), None);
        assert_eq!(catalog.by_image_key(""), None);
    }

    #[test]
    fn test_catalogued_terrain() {
        let catalog = TokenCatalog::new();

        let forged = Token::new("Cidaris", 5, Terrain::Forest, "Water5Cidaris");
        assert_eq!(catalog.catalogued_terrain(&forged), Some(Terrain::Water));

        let unknown = Token::new("Oxenfurt", 19, Terrain::Forest, "Forest19Oxenfurt");
        assert_eq!(catalog.catalogued_terrain(&unknown), None);
    }
}
