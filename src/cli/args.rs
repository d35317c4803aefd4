//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};

/// dictlog - Look up word definitions and keep a local record of them.
#[derive(Debug, Parser)]
#[command(name = "dictlog")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Parse the process arguments, lowercasing the command name first.
    pub fn parse_normalized() -> Self {
        Self::parse_args(std::env::args_os())
    }

    /// Parse `args` (program name first) without ever failing.
    ///
    /// `--help` and `--version` print and exit as usual. Any other usage
    /// error is reported as an invalid command rather than a clap error.
    pub fn parse_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        let args = normalize_args(args);
        match Self::try_parse_from(args.clone()) {
            Ok(cli) => cli,
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                e.exit()
            }
            Err(_) => Self {
                command: Some(Commands::External(args.into_iter().skip(1).collect())),
            },
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List all commands
    Help(HelpArgs),

    /// Print all previous searches
    List(ListArgs),

    /// Search for a definition and record the result
    Search(SearchArgs),

    /// Anything else; reported as an invalid command
    #[command(external_subcommand)]
    External(Vec<OsString>),
}

/// Arguments for the `help` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct HelpArgs {
    /// Unexpected trailing arguments (rejected)
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Print only the words, omitting definitions
    #[arg(long)]
    pub oneline: bool,

    /// Trailing arguments (ignored)
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

/// Arguments for the `search` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SearchArgs {
    /// Word to look up
    #[arg(allow_hyphen_values = true)]
    pub word: Option<String>,

    /// Unexpected trailing arguments (rejected)
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

impl SearchArgs {
    /// The word to search for, if exactly one was given.
    pub fn single_word(&self) -> Option<&str> {
        match (&self.word, self.extra.is_empty()) {
            (Some(word), true) if !word.trim().is_empty() => Some(word.as_str()),
            _ => None,
        }
    }
}

/// Lowercase the command name so `SEARCH word` behaves like `search word`.
///
/// Only the first argument after the program name is touched, and only when
/// it is not a flag.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .enumerate()
        .map(|(index, arg)| match arg.to_str() {
            Some(s) if index == 1 && !s.starts_with('-') => OsString::from(s.to_lowercase()),
            _ => arg,
        })
        .collect()
}
