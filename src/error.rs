//! Error types for dictlog operations.
//!
//! This module defines [`DictlogError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Storage setup and network transport failures are fatal and end the process
//! - Malformed responses and corrupt cache rows are absorbed by the resolver
//! - Use `anyhow::Error` (via `DictlogError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for dictlog operations.
#[derive(Debug, Error)]
pub enum DictlogError {
    /// The data directory or database could not be created or opened.
    #[error("unable to initialise storage at {path}: {message}")]
    StorageInit { path: PathBuf, message: String },

    /// A storage statement failed.
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// A stored value could not be decoded.
    #[error("corrupt cache entry for '{word}': {message}")]
    CorruptEntry { word: String, message: String },

    /// The remote dictionary could not be reached.
    #[error("error occurred during search | {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The remote dictionary answered with something other than definitions.
    #[error("unexpected response for '{word}': {message}")]
    MalformedResponse { word: String, message: String },

    /// The configured dictionary endpoint is not a usable URL.
    #[error("invalid dictionary endpoint {url}: {message}")]
    InvalidEndpoint { url: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DictlogError {
    /// Whether this error must terminate the process with exit code 1.
    ///
    /// Only malformed responses and corrupt rows are recoverable; the
    /// resolver absorbs those before they reach the dispatcher.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            Self::MalformedResponse { .. } | Self::CorruptEntry { .. }
        )
    }
}

/// Result type alias for dictlog operations.
pub type Result<T> = std::result::Result<T, DictlogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_init_displays_path_and_message() {
        let err = DictlogError::StorageInit {
            path: PathBuf::from("/home/me/.dictionarylogger"),
            message: "permission denied".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/home/me/.dictionarylogger"));
        assert!(msg.contains("permission denied"));
    }

    #[test]
    fn corrupt_entry_displays_word() {
        let err = DictlogError::CorruptEntry {
            word: "quiz".into(),
            message: "expected value".into(),
        };
        assert!(err.to_string().contains("quiz"));
    }

    #[test]
    fn malformed_response_is_recoverable() {
        let err = DictlogError::MalformedResponse {
            word: "zzz".into(),
            message: "invalid type: map".into(),
        };
        assert!(!err.is_fatal());
        assert!(err.to_string().contains("zzz"));
    }

    #[test]
    fn storage_init_is_fatal() {
        let err = DictlogError::StorageInit {
            path: PathBuf::from("/x"),
            message: "nope".into(),
        };
        assert!(err.is_fatal());
    }

    #[test]
    fn invalid_endpoint_displays_url() {
        let err = DictlogError::InvalidEndpoint {
            url: "not a url".into(),
            message: "relative URL without a base".into(),
        };
        assert!(err.to_string().contains("not a url"));
        assert!(err.is_fatal());
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: DictlogError = io_err.into();
        assert!(matches!(err, DictlogError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(DictlogError::CorruptEntry {
                word: "test".into(),
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
