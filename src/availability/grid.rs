//! Tabular dataset parsing.

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::EMPTY_CELL_PLACEHOLDER;
use crate::error_handling::CertificationError;

use super::CertificationRecord;

/// Certificate cells list several certificates separated by newlines, commas
/// or semicolons.
static CERTIFICATE_SEPARATOR: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"[\n\r,;]+")
        .map_err(|e| log::error!("Invalid certificate separator pattern: {e}"))
        .ok()
});

/// Column positions located in the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Columns {
    pub(crate) game: usize,
    pub(crate) certificate: usize,
}

/// Reads CSV text into rows of cells.
///
/// Rows may have different lengths; `\r\n`, `\n` and `\r` all end a row.
pub(crate) fn read_grid(text: &str) -> Result<Vec<Vec<String>>, CertificationError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

/// Finds the game and certificate columns. The certificate column is
/// mandatory; the game column falls back to the first column.
pub(crate) fn locate_columns(header: &[String]) -> Result<Columns, CertificationError> {
    let lowered: Vec<String> = header.iter().map(|h| h.trim().to_lowercase()).collect();

    let certificate = lowered
        .iter()
        .position(|h| h.contains("certificate") || h.contains("cert"))
        .ok_or(CertificationError::MissingCertificateColumn)?;
    let game = lowered
        .iter()
        .enumerate()
        .find(|(index, h)| *index != certificate && h.contains("game"))
        .map_or(0, |(index, _)| index);

    Ok(Columns { game, certificate })
}

/// Splits a certificate cell into trimmed, non-placeholder entries.
pub(crate) fn split_certificates(cell: &str) -> BTreeSet<String> {
    let pieces: Vec<&str> = match CERTIFICATE_SEPARATOR.as_ref() {
        Some(separator) => separator.split(cell).collect(),
        None => cell.split([',', ';', '\n', '\r']).collect(),
    };
    pieces
        .into_iter()
        .map(str::trim)
        .filter(|piece| is_meaningful(piece))
        .map(str::to_string)
        .collect()
}

fn is_meaningful(cell: &str) -> bool {
    let cell = cell.trim();
    !cell.is_empty() && cell != EMPTY_CELL_PLACEHOLDER
}

/// Builds one record per data row with a non-empty game cell.
pub(crate) fn records(
    header: &[String],
    rows: &[Vec<String>],
    columns: Columns,
) -> Vec<CertificationRecord> {
    rows.iter()
        .filter_map(|row| {
            let game = row.get(columns.game).map(|g| g.trim()).unwrap_or_default();
            if game.is_empty() {
                return None;
            }

            let certificates = row
                .get(columns.certificate)
                .map(|cell| split_certificates(cell))
                .unwrap_or_default();

            let attributes: BTreeMap<String, String> = header
                .iter()
                .zip(row.iter())
                .enumerate()
                .filter(|(index, (_, value))| *index != columns.certificate && is_meaningful(value))
                .map(|(_, (name, value))| (name.trim().to_string(), value.trim().to_string()))
                .collect();

            Some(CertificationRecord {
                game: game.to_string(),
                certificates,
                attributes,
            })
        })
        .collect()
}
