//! Read-only reference tables.
//!
//! Parameter name lists, currency and jurisdiction codes, the game catalog and
//! the partner code table. Built once (bundled defaults or a JSON override),
//! then shared by reference with every validator and the config resolver.

mod defaults;

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::error_handling::ReferenceError;

/// Game category as recorded in the catalog.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum GameCategory {
    Crash,
    Turbo,
    Slots,
    Multiplayer,
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameCatalogEntry {
    pub id: String,
    pub display_name: String,
    pub provider_id: String,
    pub category: GameCategory,
}

/// Serialized shape of the reference tables.
///
/// This is what `--reference <file>` must contain. Every field is required so
/// that an override cannot silently fall back to bundled values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceTables {
    pub required_params: Vec<String>,
    pub optional_params: Vec<String>,
    pub currencies: Vec<String>,
    pub jurisdictions: Vec<String>,
    pub games: Vec<GameCatalogEntry>,
    pub partner_codes: BTreeMap<String, String>,
}

impl ReferenceTables {
    /// The bundled tables.
    pub fn builtin() -> Self {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        Self {
            required_params: owned(defaults::REQUIRED_PARAMS),
            optional_params: owned(defaults::OPTIONAL_PARAMS),
            currencies: owned(defaults::CURRENCIES),
            jurisdictions: owned(defaults::JURISDICTIONS),
            games: defaults::GAMES
                .iter()
                .map(|(id, name, provider, category)| GameCatalogEntry {
                    id: id.to_string(),
                    display_name: name.to_string(),
                    provider_id: provider.to_string(),
                    category: *category,
                })
                .collect(),
            partner_codes: defaults::PARTNER_CODES
                .iter()
                .map(|(code, id)| (code.to_string(), id.to_string()))
                .collect(),
        }
    }
}

/// Indexed, immutable reference data.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    tables: ReferenceTables,
    known_params: HashSet<String>,
    currencies: HashSet<String>,
    jurisdictions: HashSet<String>,
    // lower-cased id -> index into tables.games
    games_by_id: HashMap<String, usize>,
}

impl ReferenceData {
    /// Indexes the given tables.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceError::DuplicateGame`] if two catalog entries share an
    /// id (compared case-insensitively).
    pub fn from_tables(tables: ReferenceTables) -> Result<Self, ReferenceError> {
        let mut seen = HashSet::with_capacity(tables.games.len());
        for game in &tables.games {
            if !seen.insert(game.id.to_lowercase()) {
                return Err(ReferenceError::DuplicateGame(game.id.clone()));
            }
        }
        Ok(Self::index(tables))
    }

    /// The bundled reference data.
    pub fn builtin() -> Self {
        Self::index(ReferenceTables::builtin())
    }

    fn index(tables: ReferenceTables) -> Self {
        let known_params = tables
            .required_params
            .iter()
            .chain(tables.optional_params.iter())
            .cloned()
            .collect();
        let currencies = tables.currencies.iter().map(|c| c.to_uppercase()).collect();
        let jurisdictions = tables
            .jurisdictions
            .iter()
            .map(|j| j.to_uppercase())
            .collect();
        let games_by_id = tables
            .games
            .iter()
            .enumerate()
            .map(|(index, game)| (game.id.to_lowercase(), index))
            .collect();

        Self {
            tables,
            known_params,
            currencies,
            jurisdictions,
            games_by_id,
        }
    }

    /// Parses and indexes a JSON reference document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not match [`ReferenceTables`] or the
    /// catalog contains duplicates.
    pub fn from_json_str(json: &str) -> Result<Self, ReferenceError> {
        let tables: ReferenceTables = serde_json::from_str(json)?;
        Self::from_tables(tables)
    }

    /// Loads a JSON reference document from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_json_file(path: &Path) -> Result<Self, ReferenceError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    pub fn required_params(&self) -> &[String] {
        &self.tables.required_params
    }

    /// True if `name` is a required or optional launch parameter.
    pub fn is_known_param(&self, name: &str) -> bool {
        self.known_params.contains(name)
    }

    /// Case-insensitive currency lookup.
    pub fn is_valid_currency(&self, code: &str) -> bool {
        self.currencies.contains(&code.to_uppercase())
    }

    /// Case-insensitive jurisdiction lookup.
    pub fn is_valid_jurisdiction(&self, code: &str) -> bool {
        self.jurisdictions.contains(&code.to_uppercase())
    }

    pub fn jurisdictions(&self) -> &[String] {
        &self.tables.jurisdictions
    }

    /// Case-insensitive catalog lookup.
    pub fn game(&self, id: &str) -> Option<&GameCatalogEntry> {
        self.games_by_id
            .get(&id.to_lowercase())
            .and_then(|index| self.tables.games.get(*index))
    }

    pub fn is_valid_game_id(&self, id: &str) -> bool {
        self.game(id).is_some()
    }

    pub fn games(&self) -> &[GameCatalogEntry] {
        &self.tables.games
    }

    /// Sorted ids of every catalog game in `category`.
    pub fn master_list(&self, category: GameCategory) -> Vec<String> {
        let mut ids: Vec<String> = self
            .tables
            .games
            .iter()
            .filter(|game| game.category == category)
            .map(|game| game.id.clone())
            .collect();
        ids.sort();
        ids
    }

    /// Translates a numeric partner code to a catalog id, if known.
    pub fn translate_partner_code(&self, code: &str) -> Option<&str> {
        self.tables.partner_codes.get(code).map(String::as_str)
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::builtin()
    }
}
