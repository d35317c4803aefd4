//! dictlog - Command-line dictionary lookup with a local cache.
//!
//! Given a word, dictlog prints its part-of-speech definitions and examples.
//! Results are cached in a per-user SQLite database so repeated lookups do
//! not touch the network.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Runtime settings (data directory, dictionary endpoint)
//! - [`error`] - Error types and result aliases
//! - [`model`] - Definition records and word normalization
//! - [`remote`] - HTTP lookup against the dictionary service
//! - [`render`] - Plain-text presentation of definitions
//! - [`resolver`] - Cache-or-fetch resolution
//! - [`storage`] - Persistent definition cache
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use dictlog::model::{Definition, DefinitionRecord, Entry};
//! use dictlog::render::render_entries;
//!
//! let entries = vec![Entry {
//!     meanings: vec![DefinitionRecord {
//!         part_of_speech: "noun".to_string(),
//!         definitions: vec![Definition::new("a test", "this is a test")],
//!     }],
//! }];
//! assert!(render_entries(&entries).contains("\tnoun\n"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod remote;
pub mod render;
pub mod resolver;
pub mod storage;
pub mod ui;

pub use error::{DictlogError, Result};
