//! Help command implementation.
//!
//! The `dictlog help` command prints the list of commands.

use crate::cli::args::HelpArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Hint shown when no command is given.
pub const USAGE_HINT: &str = "use command 'help' for a list of available commands";

/// Fixed help text.
pub const HELP_TEXT: &str = "
\thelp: List all commands

\tlist: Print all previous searches, --oneline to omit definitions

\tsearch: Search for definition and record result

";

/// The help command implementation.
pub struct HelpCommand {
    args: HelpArgs,
}

impl HelpCommand {
    /// Create a new help command.
    pub fn new(args: HelpArgs) -> Self {
        Self { args }
    }
}

impl Command for HelpCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if !self.args.extra.is_empty() {
            ui.message("no arguments required for help command");
            return Ok(CommandResult::success());
        }

        ui.output(HELP_TEXT);
        Ok(CommandResult::success())
    }
}
