//! Search command implementation.
//!
//! The `dictlog search <word>` command resolves a word through the cache
//! and the remote dictionary and prints its definitions.

use crate::cli::args::SearchArgs;
use crate::error::Result;
use crate::remote::DefinitionSource;
use crate::render::render_entries;
use crate::resolver::{Resolution, Resolver};
use crate::storage::DefinitionStore;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The search command implementation.
pub struct SearchCommand<S, R> {
    resolver: Resolver<S, R>,
    args: SearchArgs,
}

impl<S: DefinitionStore, R: DefinitionSource> SearchCommand<S, R> {
    /// Create a new search command.
    pub fn new(resolver: Resolver<S, R>, args: SearchArgs) -> Self {
        Self { resolver, args }
    }
}

impl<S: DefinitionStore, R: DefinitionSource> Command for SearchCommand<S, R> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(word) = self.args.single_word() else {
            ui.message("requires a single word after the search command");
            return Ok(CommandResult::success());
        };

        match self.resolver.resolve(word)? {
            Resolution::Cached(entry) | Resolution::Fetched(entry) => {
                ui.output(&render_entries(&entry.entries));
            }
            Resolution::NotFound => {}
            Resolution::Unparseable => ui.message("unable to find definition"),
        }

        Ok(CommandResult::success())
    }
}
