//! Tic-tac-toe with a branching move history.

mod action;
mod error;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::Move;
pub use error::HistoryError;
pub use history::GameState;
pub use position::Position;
pub use rules::{WinningLine, evaluate};
pub use types::{Board, Player, Square};
