//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use super::win::evaluate;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(level = "trace")]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no winner is a draw.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && evaluate(board).is_none()
}
