//! Views derived from [`GameState`] on every read.
//!
//! Views borrow the state immutably and never mutate it. User input is
//! turned into a [`GameAction`], which the owner of the state applies.

mod board;
mod history;

pub use board::{BoardView, Cell, Status};
pub use history::{HistoryEntry, HistoryView};

use crate::games::tictactoe::{Board, GameState, HistoryError};
use tracing::instrument;

/// A state change requested by a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Record a new snapshot after the current one.
    Play(Board),
    /// Display an earlier (or later) snapshot.
    JumpTo(usize),
    /// Flip the move list order.
    ToggleOrder,
}

impl GameAction {
    /// Applies this action to `state`.
    ///
    /// # Errors
    ///
    /// Only [`GameAction::JumpTo`] can fail, with
    /// [`HistoryError::OutOfRange`].
    #[instrument(skip(state))]
    pub fn apply(self, state: &mut GameState) -> Result<(), HistoryError> {
        match self {
            GameAction::Play(next) => state.play(next),
            GameAction::JumpTo(target) => state.jump_to(target)?,
            GameAction::ToggleOrder => state.toggle_order(),
        }
        Ok(())
    }
}
