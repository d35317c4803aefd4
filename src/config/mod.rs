//! Runtime settings for dictlog.
//!
//! Settings are resolved once at startup from the environment:
//!
//! - `DICTLOG_HOME` overrides the data directory (default `~/.dictionarylogger`)
//! - `DICTLOG_API_URL` overrides the dictionary endpoint
//!
//! # Example
//!
//! ```
//! use dictlog::config::Settings;
//!
//! let settings = Settings::from_lookup(|key| match key {
//!     "DICTLOG_HOME" => Some("/tmp/dictlog".to_string()),
//!     _ => None,
//! });
//! assert!(settings.database_path().ends_with("dictionarylogger.db"));
//! ```

use std::path::PathBuf;

/// Directory created under the user's home for the cache database.
pub const DATA_DIR_NAME: &str = ".dictionarylogger";

/// Database file name inside the data directory.
pub const DATABASE_FILE: &str = "dictionarylogger.db";

/// Default remote dictionary endpoint; the word is appended as a path segment.
pub const DEFAULT_API_BASE: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Environment variable overriding the data directory.
pub const HOME_ENV: &str = "DICTLOG_HOME";

/// Environment variable overriding the dictionary endpoint.
pub const API_URL_ENV: &str = "DICTLOG_API_URL";

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory holding the cache database.
    pub data_dir: PathBuf,
    /// Base URL of the remote dictionary.
    pub api_base: String,
}

impl Settings {
    /// Resolve settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings using a custom variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = lookup(HOME_ENV)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);

        let api_base = lookup(API_URL_ENV)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Self { data_dir, api_base }
    }

    /// Path to the cache database file.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE)
    }
}

/// Get the default data directory.
pub fn default_data_dir() -> PathBuf {
    directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_DIR_NAME)
}
