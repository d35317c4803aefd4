//! Plain-text rendering of definitions.
//!
//! Rendering is pure: the same entries always produce the same bytes, which
//! is what lets cached lookups print exactly what a fresh lookup printed.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::model::{DefinitionRecord, Entry};

/// Render one part-of-speech record.
pub fn render_record(record: &DefinitionRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\t{}", record.part_of_speech);

    for def in &record.definitions {
        let _ = writeln!(out, "\t\tDefinition:");
        let _ = writeln!(out, "\t\t\t{}", def.definition);
        if !def.example.is_empty() {
            let _ = writeln!(out, "\t\tExample:");
            let _ = writeln!(out, "\t\t\t{}", def.example);
        }
        out.push('\n');
    }

    out
}

/// Render every result for a word, numbered from 0.
pub fn render_entries(entries: &[Entry]) -> String {
    let mut out = String::new();

    for (index, entry) in entries.iter().enumerate() {
        let _ = writeln!(out, "Definition {}:", index);
        out.push('\n');
        for record in &entry.meanings {
            out.push_str(&render_record(record));
        }
    }

    out
}

/// Render the `list` output for every stored word.
///
/// With `oneline`, only the `Word:` lines are produced.
pub fn render_listing(all: &BTreeMap<String, Vec<Entry>>, oneline: bool) -> String {
    let mut out = String::new();

    for (word, entries) in all {
        let _ = writeln!(out, "Word: {}", word);
        if !oneline {
            out.push_str(&render_entries(entries));
        }
    }

    out
}
