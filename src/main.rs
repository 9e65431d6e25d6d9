//! rewind_tictactoe - terminal tic-tac-toe with move history.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use rewind_tictactoe::{Stylesheet, Theme, run_tui};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_file)?;
    info!(style = ?cli.style, "Starting rewind_tictactoe");

    let theme = match &cli.style {
        Some(path) => {
            let sheet = Stylesheet::from_file(path)?;
            Theme::try_from(&sheet)?
        }
        None => Theme::default(),
    };

    run_tui(theme)
}

/// Sends logs to a file to avoid interfering with the TUI.
fn init_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
