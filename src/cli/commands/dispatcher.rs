//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use tracing::debug;

use crate::cli::args::{Cli, Commands};
use crate::config::Settings;
use crate::error::Result;
use crate::remote::HttpDictionary;
use crate::resolver::Resolver;
use crate::storage::SqliteStore;
use crate::ui::UserInterface;

use super::help::USAGE_HINT;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] carrying the exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self { exit_code: 0 }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    settings: Settings,
}

impl CommandDispatcher {
    /// Create a new dispatcher with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Get the settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Dispatch and execute a command.
    ///
    /// The cache database is opened only for `list` and `search`; failing to
    /// open it is returned as an error.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Help(args)) => {
                let cmd = super::help::HelpCommand::new(args.clone());
                cmd.execute(ui)
            }
            Some(Commands::List(args)) => {
                let store = self.open_store()?;
                let cmd = super::list::ListCommand::new(store, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Search(args)) => {
                let store = self.open_store()?;
                let source = HttpDictionary::new(&self.settings.api_base)?;
                let cmd =
                    super::search::SearchCommand::new(Resolver::new(store, source), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::External(args)) => {
                debug!("Unknown command: {:?}", args);
                ui.message(&format!("invalid command | {}", USAGE_HINT));
                Ok(CommandResult::success())
            }
            None => {
                ui.message(USAGE_HINT);
                Ok(CommandResult::success())
            }
        }
    }

    fn open_store(&self) -> Result<SqliteStore> {
        SqliteStore::open(self.settings.database_path())
    }
}
