//! Local definition cache.
//!
//! This module provides the [`DefinitionStore`] trait and its implementations:
//! - [`SqliteStore`] persists entries in a single SQLite file
//! - [`MemoryStore`] keeps entries in process, for tests and embedding
//!
//! Entries are stored as structured records and rendered on read, so output
//! formatting can change without touching cached data.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use std::collections::BTreeMap;

use crate::error::Result;
use crate::model::Entry;

/// Key-value store mapping a normalized word to its definitions.
pub trait DefinitionStore {
    /// Look up the cached entries for a normalized word.
    ///
    /// Returns `Ok(None)` when nothing is stored.
    fn get(&self, word: &str) -> Result<Option<Vec<Entry>>>;

    /// Store entries for a normalized word.
    ///
    /// An existing row for the same word is replaced.
    fn put(&self, word: &str, entries: &[Entry]) -> Result<()>;

    /// Return every stored word with its entries, sorted by word.
    fn list_all(&self) -> Result<BTreeMap<String, Vec<Entry>>>;
}

impl<T: DefinitionStore + ?Sized> DefinitionStore for &T {
    fn get(&self, word: &str) -> Result<Option<Vec<Entry>>> {
        (**self).get(word)
    }

    fn put(&self, word: &str, entries: &[Entry]) -> Result<()> {
        (**self).put(word, entries)
    }

    fn list_all(&self) -> Result<BTreeMap<String, Vec<Entry>>> {
        (**self).list_all()
    }
}
