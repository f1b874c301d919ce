//! Game availability by certificate.
//!
//! A [`CertificationIndex`] is built from a CSV grid whose header row names a
//! game column and a certificate column. It answers two queries:
//! which games hold a certificate, and which certificates a game holds.
//!
//! The universal certificate (`Curacao`) is always part of the certificate
//! universe and matches every loaded game.

mod fetch;
mod grid;

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use strum_macros::Display;

use crate::config::UNIVERSAL_CERTIFICATE;
use crate::error_handling::CertificationError;

pub use fetch::load_certifications;

/// One data row of the certification dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertificationRecord {
    pub game: String,
    pub certificates: BTreeSet<String>,
    /// Every non-empty column except the certificate column
    pub attributes: BTreeMap<String, String>,
}

/// How a game matched a certificate query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// The universal certificate was queried
    #[strum(serialize = "all allowed")]
    AllAllowed,
    /// The game lists the certificate, or one containing it
    #[strum(serialize = "certified")]
    Certified,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameMatch {
    pub game: String,
    pub kind: MatchKind,
}

/// Queryable view over a certification dataset.
#[derive(Debug, Clone, Default)]
pub struct CertificationIndex {
    /// Sorted by game name, one record per game
    records: Vec<CertificationRecord>,
}

impl CertificationIndex {
    /// Parses CSV text with a header row.
    ///
    /// # Errors
    ///
    /// Returns [`CertificationError::EmptyDataset`] if there is no header row,
    /// [`CertificationError::MissingCertificateColumn`] if no header mentions a
    /// certificate, or a CSV error if the text cannot be tokenised.
    pub fn from_csv(text: &str) -> Result<Self, CertificationError> {
        Self::from_grid(grid::read_grid(text)?)
    }

    /// Builds the index from rows of cells; the first row is the header.
    pub fn from_grid(rows: Vec<Vec<String>>) -> Result<Self, CertificationError> {
        let (header, data) = rows.split_first().ok_or(CertificationError::EmptyDataset)?;
        let columns = grid::locate_columns(header)?;
        Ok(Self::from_records(grid::records(header, data, columns)))
    }

    /// Rows naming the same game are merged: certificates are united and later
    /// attribute values win.
    pub fn from_records(records: impl IntoIterator<Item = CertificationRecord>) -> Self {
        let mut merged: BTreeMap<String, CertificationRecord> = BTreeMap::new();
        for record in records {
            match merged.get_mut(&record.game) {
                Some(existing) => {
                    log::debug!("Merging duplicate certification row for {}", record.game);
                    existing.certificates.extend(record.certificates);
                    existing.attributes.extend(record.attributes);
                }
                None => {
                    merged.insert(record.game.clone(), record);
                }
            }
        }
        Self {
            records: merged.into_values().collect(),
        }
    }

    pub fn records(&self) -> &[CertificationRecord] {
        &self.records
    }

    pub fn game_count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every certificate seen in the dataset plus the universal certificate,
    /// sorted.
    pub fn certificates(&self) -> Vec<String> {
        let mut universe: BTreeSet<&str> = self
            .records
            .iter()
            .flat_map(|record| record.certificates.iter().map(String::as_str))
            .collect();
        universe.insert(UNIVERSAL_CERTIFICATE);
        universe.into_iter().map(str::to_string).collect()
    }

    /// Games holding `certificate`, sorted by name.
    ///
    /// The universal certificate (case-insensitive) returns every game as
    /// [`MatchKind::AllAllowed`]. Any other query matches a game whose
    /// certificate set contains it exactly or contains an entry of which the
    /// query is a substring. A blank query is a substring of everything, so
    /// it matches every game holding at least one certificate.
    pub fn games_for_certificate(&self, certificate: &str) -> Vec<GameMatch> {
        let query = certificate.trim();
        if query.eq_ignore_ascii_case(UNIVERSAL_CERTIFICATE) {
            return self
                .records
                .iter()
                .map(|record| GameMatch {
                    game: record.game.clone(),
                    kind: MatchKind::AllAllowed,
                })
                .collect();
        }
        self.records
            .iter()
            .filter(|record| {
                record.certificates.contains(query)
                    || record.certificates.iter().any(|c| c.contains(query))
            })
            .map(|record| GameMatch {
                game: record.game.clone(),
                kind: MatchKind::Certified,
            })
            .collect()
    }

    /// Certificates held by `game`, sorted. Unknown games yield an empty list.
    pub fn certificates_for_game(&self, game: &str) -> Vec<String> {
        self.record(game)
            .map(|record| record.certificates.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Non-certificate columns of the row for `game`.
    pub fn attributes(&self, game: &str) -> Option<&BTreeMap<String, String>> {
        self.record(game).map(|record| &record.attributes)
    }

    /// Exact name first, then a case-insensitive match.
    fn record(&self, game: &str) -> Option<&CertificationRecord> {
        let game = game.trim();
        self.records
            .binary_search_by(|record| record.game.as_str().cmp(game))
            .ok()
            .map(|index| &self.records[index])
            .or_else(|| {
                self.records
                    .iter()
                    .find(|record| record.game.eq_ignore_ascii_case(game))
            })
    }
}
