//! List command implementation.
//!
//! The `dictlog list` command prints every word in the local cache.

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::render::render_listing;
use crate::storage::DefinitionStore;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand<S> {
    store: S,
    args: ListArgs,
}

impl<S: DefinitionStore> ListCommand<S> {
    /// Create a new list command.
    pub fn new(store: S, args: ListArgs) -> Self {
        Self { store, args }
    }
}

impl<S: DefinitionStore> Command for ListCommand<S> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let all = self.store.list_all()?;
        ui.output(&render_listing(&all, self.args.oneline));
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Definition, DefinitionRecord, Entry};
    use crate::storage::MemoryStore;
    use crate::ui::MockUI;

    fn seeded_store() -> MemoryStore {
        let store = MemoryStore::new();
        store
            .put(
                "quiz",
                &[Entry {
                    meanings: vec![DefinitionRecord {
                        part_of_speech: "noun".into(),
                        definitions: vec![Definition::new("a test", "this is a test")],
                    }],
                }],
            )
            .unwrap();
        store
    }

    #[test]
    fn list_empty_store_prints_nothing() {
        let store = MemoryStore::new();
        let mut ui = MockUI::new();

        let result = ListCommand::new(&store, ListArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 0);
        assert_eq!(ui.stdout(), "");
    }

    #[test]
    fn list_oneline_prints_words() {
        let store = seeded_store();
        let mut ui = MockUI::new();

        ListCommand::new(&store, ListArgs {
            oneline: true,
            extra: Vec::new(),
        })
            .execute(&mut ui)
            .unwrap();

        assert_eq!(ui.stdout(), "Word: quiz\n");
    }

    #[test]
    fn list_full_prints_definitions() {
        let store = seeded_store();
        let mut ui = MockUI::new();

        ListCommand::new(&store, ListArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(ui.stdout().contains("Word: quiz"));
        assert!(ui.stdout().contains("this is a test"));
    }
}
