//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use derive_getters::Getters;
use tracing::instrument;

/// The eight winning lines, scanned in order: rows top-to-bottom, columns
/// left-to-right, then the two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Three squares in a row held by the same player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct WinningLine {
    /// Player holding the line.
    player: Player,
    /// The three positions, in table order.
    positions: [Position; 3],
}

impl WinningLine {
    /// Board indices (0-8) of the three squares.
    pub fn indices(&self) -> [usize; 3] {
        self.positions.map(Position::to_index)
    }

    /// Whether `pos` is part of this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }
}

/// Finds the first completed line on the board.
///
/// Returns `None` when no row, column or diagonal is held by one player.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board) -> Option<WinningLine> {
    LINES.into_iter().find_map(|positions| {
        let [a, b, c] = positions;
        match board.get(a) {
            Square::Occupied(player)
                if board.get(b) == board.get(a) && board.get(c) == board.get(a) =>
            {
                Some(WinningLine { player, positions })
            }
            _ => None,
        }
    })
}
