//! User-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writing to the real stdout/stderr
//! - [`MockUI`] capturing output for tests
//!
//! # Example
//!
//! ```
//! use dictlog::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Word: quiz");
//! assert!(ui.has_message("Word: quiz"));
//! ```

pub mod mock;
pub mod terminal;

pub use mock::MockUI;
pub use terminal::TerminalUI;

/// Trait for user interface interactions.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Display a line of text on stdout.
    fn message(&mut self, msg: &str);

    /// Write pre-rendered text to stdout exactly as given.
    fn output(&mut self, text: &str);

    /// Display an error on stderr.
    fn error(&mut self, msg: &str);
}
