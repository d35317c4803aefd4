//! Definition data model.
//!
//! The shapes here mirror the remote dictionary's JSON so a response can be
//! decoded directly, and they are also what the cache stores.

use serde::{Deserialize, Serialize};

/// A single definition with its usage example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    /// The definition text.
    pub definition: String,

    /// Example sentence; empty when the source has none.
    #[serde(default)]
    pub example: String,
}

impl Definition {
    /// Create a definition with an example.
    pub fn new(definition: impl Into<String>, example: impl Into<String>) -> Self {
        Self {
            definition: definition.into(),
            example: example.into(),
        }
    }
}

/// One part-of-speech grouping of definitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionRecord {
    /// Part-of-speech label (e.g. "noun").
    #[serde(default)]
    pub part_of_speech: String,

    /// Definitions in source order.
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

/// One result from the remote source; homographs produce several.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Entry {
    /// Part-of-speech records in source order.
    #[serde(default)]
    pub meanings: Vec<DefinitionRecord>,
}

/// A normalized word and everything known about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    /// The normalized (lowercased) word.
    pub word: String,

    /// Results in the order the source returned them.
    pub entries: Vec<Entry>,
}

impl WordEntry {
    /// Create a word entry.
    pub fn new(word: impl Into<String>, entries: Vec<Entry>) -> Self {
        Self {
            word: word.into(),
            entries,
        }
    }

    /// True when there is nothing to show for this word.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Normalize a word for lookup and storage keys.
pub fn normalize_word(word: &str) -> String {
    word.trim().to_lowercase()
}
