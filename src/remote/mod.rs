//! Remote definition lookup.
//!
//! This module provides the [`DefinitionSource`] seam and the HTTP client
//! that talks to the public dictionary service.

pub mod http;

pub use http::HttpDictionary;

use crate::error::Result;
use crate::model::Entry;

/// Something that can produce definitions for a word.
pub trait DefinitionSource {
    /// Fetch every result the source has for `word`.
    ///
    /// An empty vector means the source knows nothing about the word.
    /// Transport problems are [`crate::DictlogError::Transport`]; a body
    /// that cannot be decoded is [`crate::DictlogError::MalformedResponse`].
    fn fetch_definitions(&self, word: &str) -> Result<Vec<Entry>>;
}

impl<T: DefinitionSource + ?Sized> DefinitionSource for &T {
    fn fetch_definitions(&self, word: &str) -> Result<Vec<Entry>> {
        (**self).fetch_definitions(word)
    }
}
