//! dictlog CLI entry point.

use std::process::ExitCode;

use dictlog::cli::{Cli, CommandDispatcher};
use dictlog::config::Settings;
use dictlog::ui::{TerminalUI, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level comes from `RUST_LOG` when set, otherwise warnings only.
/// Logs go to stderr so stdout carries nothing but command output.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dictlog=warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse_normalized();
    init_tracing();

    tracing::debug!("dictlog starting with args: {:?}", cli);

    let settings = Settings::from_env();
    let mut ui = TerminalUI::new();
    let dispatcher = CommandDispatcher::new(settings);

    match dispatcher.dispatch(&cli, &mut ui) {
        Ok(result) => ExitCode::from(u8::try_from(result.exit_code).unwrap_or(1)),
        Err(e) => {
            ui.error(&e.to_string());
            ExitCode::from(1)
        }
    }
}
