//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! output for later assertion.
//!
//! # Example
//!
//! ```
//! use dictlog::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.output("Definition 0:\n");
//! ui.error("unable to open database");
//!
//! assert_eq!(ui.stdout(), "Definition 0:\n");
//! assert!(ui.has_error("unable to open database"));
//! ```

use super::UserInterface;

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    stdout: String,
    messages: Vec<String>,
    errors: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written to stdout, in order.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Check if a message containing the text was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if an error containing the text was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
        self.stdout.push_str(msg);
        self.stdout.push('\n');
    }

    fn output(&mut self, text: &str) {
        self.stdout.push_str(text);
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}
