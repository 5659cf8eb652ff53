//! Command-line interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with a time-travelling move history
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with a time-travelling move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Show the move list newest first
        #[arg(long)]
        descending: bool,
    },

    /// Click squares in order and print the resulting game
    Replay {
        /// Square indices 0-8, row-major
        #[arg(value_parser = clap::value_parser!(u8).range(0..=8))]
        cells: Vec<u8>,

        /// Move to display after replaying
        #[arg(short, long)]
        jump: Option<usize>,

        /// Show the move list newest first
        #[arg(long)]
        descending: bool,
    },
}
