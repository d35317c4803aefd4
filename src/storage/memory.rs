//! In-memory definition store.

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::error::Result;
use crate::model::Entry;

use super::DefinitionStore;

/// Definition store backed by a map; nothing touches disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, Vec<Entry>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored words.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl DefinitionStore for MemoryStore {
    fn get(&self, word: &str) -> Result<Option<Vec<Entry>>> {
        Ok(self.entries.borrow().get(word).cloned())
    }

    fn put(&self, word: &str, entries: &[Entry]) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(word.to_string(), entries.to_vec());
        Ok(())
    }

    fn list_all(&self) -> Result<BTreeMap<String, Vec<Entry>>> {
        Ok(self.entries.borrow().clone())
    }
}
