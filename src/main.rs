//! Tic-tac-toe - terminal front end.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_history::{Settings, render_text, replay, tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    init_tracing(&settings)?;

    let command = cli.command.unwrap_or(Command::Play { descending: false });
    match command {
        Command::Play { descending } => {
            let ascending = *settings.history_ascending() && !descending;
            tui::run_tui(ascending)
        }
        Command::Replay {
            cells,
            jump,
            descending,
        } => {
            let ascending = *settings.history_ascending() && !descending;
            run_replay(&cells, jump, ascending)
        }
    }
}

/// Plays `cells` and prints the final game to stdout.
#[instrument]
fn run_replay(cells: &[u8], jump: Option<usize>, ascending: bool) -> Result<()> {
    let cells: Vec<usize> = cells.iter().map(|&c| usize::from(c)).collect();
    let state = replay(&cells, jump, ascending)?;
    print!("{}", render_text(&state));
    Ok(())
}

/// Sends logs to the configured file; the terminal belongs to the UI.
fn init_tracing(settings: &Settings) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file())
        .with_context(|| format!("Failed to create log file {}", settings.log_file().display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!(log_file = %settings.log_file().display(), "Tracing initialized");
    Ok(())
}
