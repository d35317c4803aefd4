//! Terminal UI.

use console::{style, Term};
use std::io::Write;

use super::UserInterface;

/// Terminal UI writing to the process's stdout and stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new() -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn output(&mut self, text: &str) {
        write!(self.out, "{}", text).ok();
        self.out.flush().ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{} {}", style("✗").red().for_stderr(), msg).ok();
    }
}
