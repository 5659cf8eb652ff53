//! Tic-tac-toe with a time-travelling move history.
//!
//! # Architecture
//!
//! - **Games**: board snapshots, win detection and the branching
//!   [`GameState`] history
//! - **Views**: [`BoardView`] and [`HistoryView`], derived from the state on
//!   every read
//! - **TUI**: ratatui front end owning the state
//! - **Replay**: scripted clicks rendered as text
//!
//! # Example
//!
//! ```
//! use tictactoe_history::{BoardView, GameState, Position};
//!
//! let mut state = GameState::new();
//! if let Some(action) = BoardView::new(&state).click(Position::Center) {
//!     action.apply(&mut state).unwrap();
//! }
//! assert_eq!(BoardView::new(&state).status().to_string(), "Next player: O");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod games;
mod replay;
pub mod tui;
mod views;

// Crate-level exports - Configuration
pub use config::{ConfigError, Settings};

// Crate-level exports - Game types
pub use games::tictactoe::{
    Board, GameState, HistoryError, Move, Player, Position, Square, WinningLine, evaluate,
};

// Crate-level exports - Views
pub use views::{BoardView, Cell, GameAction, HistoryEntry, HistoryView, Status};

// Crate-level exports - Replay
pub use replay::{ReplayError, render_text, replay};
