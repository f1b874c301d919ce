//! Validation result types.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Query parameters of a launch URL, in first-seen order with unique keys.
///
/// A repeated key keeps its first position and takes the last value. Empty
/// keys are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Payload {
    entries: Vec<(String, String)>,
}

impl Payload {
    /// Inserts or overwrites `key`. Empty keys are dropped.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        if key.is_empty() {
            return;
        }
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Payload {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut payload = Payload::default();
        for (key, value) in iter {
            payload.insert(key, value);
        }
        payload
    }
}

impl Serialize for Payload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Structural components extracted from a launch URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedUrlComponents {
    /// URL scheme without the `://`, e.g. `https`
    pub protocol: String,
    /// Lower-cased host
    pub host: String,
    /// Game id per the scheme's extraction rule; empty if none was found
    pub game_id: String,
    pub payload: Payload,
}

/// Result of validating one URL against one scheme.
///
/// `components` is `None` only when the URL could not be parsed or failed a
/// mandatory prefix gate. Otherwise components are returned alongside any
/// errors so partial results can still be shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub components: Option<ParsedUrlComponents>,
}

impl ValidationOutcome {
    /// True if no errors were recorded. Warnings do not count.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// An outcome with a single error and no components.
    pub(crate) fn rejected(error: impl Into<String>) -> Self {
        Self {
            errors: vec![error.into()],
            warnings: Vec::new(),
            components: None,
        }
    }
}

/// Per-call accumulator for errors and warnings.
#[derive(Debug, Default)]
pub(crate) struct OutcomeBuilder {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl OutcomeBuilder {
    pub(crate) fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub(crate) fn warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub(crate) fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub(crate) fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub(crate) fn finish(self, components: Option<ParsedUrlComponents>) -> ValidationOutcome {
        ValidationOutcome {
            errors: self.errors,
            warnings: self.warnings,
            components,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_drops_empty_key() {
        let mut payload = Payload::default();
        payload.insert("", "value");
        assert!(payload.is_empty());
    }

    #[test]
    fn test_payload_repeated_key_keeps_position_takes_last_value() {
        let payload: Payload = [("a", "1"), ("b", "2"), ("a", "3")].into_iter().collect();
        let entries: Vec<(&str, &str)> = payload.iter().collect();
        assert_eq!(entries, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_payload_serializes_in_order() {
        let payload: Payload = [("user", "u1"), ("token", "t1")].into_iter().collect();
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"user":"u1","token":"t1"}"#);
    }

    #[test]
    fn test_outcome_serializes_camel_case_components() {
        let outcome = ValidationOutcome {
            errors: vec![],
            warnings: vec![],
            components: Some(ParsedUrlComponents {
                protocol: "https".to_string(),
                host: "launch.spribegaming.com".to_string(),
                game_id: "aviator".to_string(),
                payload: Payload::default(),
            }),
        };
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["components"]["gameId"], "aviator");
    }

    #[test]
    fn test_rejected_outcome_has_no_components() {
        let outcome = ValidationOutcome::rejected("nope");
        assert!(!outcome.is_valid());
        assert!(outcome.components.is_none());
        assert_eq!(outcome.errors, vec!["nope".to_string()]);
    }
}
