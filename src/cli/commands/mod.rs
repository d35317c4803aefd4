//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations and opens the storage and remote
//! handles only for the commands that use them.

pub mod dispatcher;
pub mod help;
pub mod list;
pub mod search;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use help::{HelpCommand, USAGE_HINT};
pub use list::ListCommand;
pub use search::SearchCommand;
