//! Cache-or-fetch resolution.
//!
//! [`Resolver`] checks the local store first and only calls the remote
//! source on a miss. New results are persisted before they are returned.
//!
//! # Example
//!
//! ```
//! use dictlog::model::Entry;
//! use dictlog::remote::DefinitionSource;
//! use dictlog::resolver::{Resolution, Resolver};
//! use dictlog::storage::MemoryStore;
//!
//! struct Offline;
//!
//! impl DefinitionSource for Offline {
//!     fn fetch_definitions(&self, _word: &str) -> dictlog::Result<Vec<Entry>> {
//!         Ok(Vec::new())
//!     }
//! }
//!
//! let store = MemoryStore::new();
//! let resolver = Resolver::new(&store, &Offline);
//! assert_eq!(resolver.resolve("Anything").unwrap(), Resolution::NotFound);
//! ```

use tracing::{debug, warn};

use crate::error::Result;
use crate::model::{normalize_word, WordEntry};
use crate::remote::DefinitionSource;
use crate::storage::DefinitionStore;

/// Outcome of resolving a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Served from the local store; no network call was made.
    Cached(WordEntry),
    /// Fetched from the remote source and stored.
    Fetched(WordEntry),
    /// The remote source returned no results.
    NotFound,
    /// The remote source answered with something that is not definitions.
    Unparseable,
}

impl Resolution {
    /// The resolved entry, if any.
    pub fn entry(&self) -> Option<&WordEntry> {
        match self {
            Self::Cached(entry) | Self::Fetched(entry) => Some(entry),
            Self::NotFound | Self::Unparseable => None,
        }
    }

    /// Whether this was a cache hit.
    pub fn is_cached(&self) -> bool {
        matches!(self, Self::Cached(_))
    }
}

/// Resolves words against a store, falling back to a remote source.
pub struct Resolver<S, R> {
    store: S,
    source: R,
}

impl<S: DefinitionStore, R: DefinitionSource> Resolver<S, R> {
    /// Create a resolver over the given store and source.
    pub fn new(store: S, source: R) -> Self {
        Self { store, source }
    }

    /// Resolve a word.
    ///
    /// Only fatal source errors (transport failures) are returned. A failed
    /// or undecodable cache read counts as a miss, and malformed responses
    /// and failed cache writes degrade to a [`Resolution`] instead.
    pub fn resolve(&self, word: &str) -> Result<Resolution> {
        let word = normalize_word(word);

        match self.store.get(&word) {
            Ok(Some(entries)) if !entries.is_empty() => {
                debug!("Cache hit for '{}'", word);
                return Ok(Resolution::Cached(WordEntry::new(word, entries)));
            }
            Ok(_) => debug!("Cache miss for '{}'", word),
            Err(e) => warn!("Cache lookup for '{}' failed, fetching instead: {}", word, e),
        }

        let entries = match self.source.fetch_definitions(&word) {
            Ok(entries) => entries,
            Err(e) if !e.is_fatal() => {
                debug!("Absorbed lookup failure: {}", e);
                return Ok(Resolution::Unparseable);
            }
            Err(e) => return Err(e),
        };

        if entries.is_empty() {
            return Ok(Resolution::NotFound);
        }

        if let Err(e) = self.store.put(&word, &entries) {
            warn!("Unable to cache '{}': {}", word, e);
        }

        Ok(Resolution::Fetched(WordEntry::new(word, entries)))
    }
}
