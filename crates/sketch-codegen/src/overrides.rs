//! Identifier override table.
//!
//! An override forces the translation of one exact identifier or dotted
//! selector, e.g. `digital.Low` -> `LOW`. Matching is whole-string and
//! case-sensitive; there is no prefix or partial matching. Overrides take
//! precedence over every structural rule in [`crate::resolve`].

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use log::debug;
use thiserror::Error;

/// The override table bundled with this crate.
pub const BUNDLED_MAPPING: &str = include_str!("../mapping.json");

/// Failure to load an override table.
///
/// A table is either loaded completely or not at all.
#[derive(Debug, Error)]
pub enum OverrideError {
    #[error("cannot read override table `{resource}`")]
    Read {
        resource: String,
        #[source]
        source: std::io::Error,
    },
    #[error("override table `{resource}` is not a flat JSON object of strings")]
    Malformed {
        resource: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Exact-match identifier replacements.
///
/// Immutable once built; share it by reference across translations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OverrideTable {
    rules: HashMap<String, String>,
}

impl OverrideTable {
    /// An empty table: every identifier passes through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a table from a JSON file.
    ///
    /// The file must hold a single object mapping strings to strings. A
    /// missing file or any other shape is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, OverrideError> {
        let path = path.as_ref();
        let resource = path.display().to_string();
        let text = fs::read_to_string(path).map_err(|source| OverrideError::Read {
            resource: resource.clone(),
            source,
        })?;
        Self::from_json(&resource, &text)
    }

    /// Load a table from any reader.
    pub fn from_reader(resource: &str, reader: impl Read) -> Result<Self, OverrideError> {
        let rules: HashMap<String, String> = serde_json::from_reader(reader).map_err(|e| {
            if e.is_io() {
                OverrideError::Read {
                    resource: resource.to_string(),
                    source: e.into(),
                }
            } else {
                OverrideError::Malformed {
                    resource: resource.to_string(),
                    source: e,
                }
            }
        })?;
        Ok(Self::from_rules(resource, rules))
    }

    /// Parse a table from JSON text. `resource` names the source in errors.
    pub fn from_json(resource: &str, text: &str) -> Result<Self, OverrideError> {
        let rules: HashMap<String, String> =
            serde_json::from_str(text).map_err(|source| OverrideError::Malformed {
                resource: resource.to_string(),
                source,
            })?;
        Ok(Self::from_rules(resource, rules))
    }

    /// The table shipped in `mapping.json`.
    pub fn bundled() -> Result<Self, OverrideError> {
        Self::from_json("mapping.json", BUNDLED_MAPPING)
    }

    fn from_rules(resource: &str, rules: HashMap<String, String>) -> Self {
        debug!("loaded {} identifier overrides from {}", rules.len(), resource);
        Self { rules }
    }

    /// The forced replacement for `key`, if any.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.rules.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over `(identifier, replacement)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rules.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for OverrideTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
