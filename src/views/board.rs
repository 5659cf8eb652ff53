//! The 3x3 board: cells, status line and click handling.

use super::GameAction;
use crate::games::tictactoe::{
    Board, GameState, Player, Position, Square, WinningLine, evaluate, rules::is_full,
};
use tracing::{debug, instrument};

/// Status line shown above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Status {
    /// A player holds a full line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// Board is full with no line.
    #[display("Tie game")]
    Tie,
    /// Game continues.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

impl Status {
    /// Whether no further moves can be played from this board.
    pub fn is_over(self) -> bool {
        !matches!(self, Status::NextPlayer(_))
    }
}

/// One rendered cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_getters::Getters)]
pub struct Cell {
    /// Where the cell sits.
    position: Position,
    /// What it holds.
    square: Square,
    /// Part of the winning line.
    winning: bool,
}

/// Read-only view of the current snapshot.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    state: &'a GameState,
}

impl<'a> BoardView<'a> {
    /// Creates a view over `state`.
    pub fn new(state: &'a GameState) -> Self {
        Self { state }
    }

    /// The snapshot being displayed.
    pub fn board(&self) -> &'a Board {
        self.state.current_board()
    }

    /// The completed line on the displayed snapshot, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        evaluate(self.board())
    }

    /// All nine cells in row-major order.
    pub fn cells(&self) -> [Cell; 9] {
        let board = self.board();
        let line = self.winning_line();
        Position::ALL.map(|position| Cell {
            position,
            square: board.get(position),
            winning: line.is_some_and(|l| l.contains(position)),
        })
    }

    /// Status for the displayed snapshot.
    pub fn status(&self) -> Status {
        if let Some(line) = self.winning_line() {
            Status::Winner(*line.player())
        } else if is_full(self.board()) {
            Status::Tie
        } else {
            Status::NextPlayer(self.state.turn())
        }
    }

    /// Handles a click on `position`.
    ///
    /// Returns `None` when the square is taken or the board already has a
    /// winner; otherwise the snapshot to play.
    #[instrument(skip(self))]
    pub fn click(&self, position: Position) -> Option<GameAction> {
        let board = self.board();
        if !board.is_empty(position) {
            debug!("Ignoring click on occupied square");
            return None;
        }
        if self.winning_line().is_some() {
            debug!("Ignoring click on finished board");
            return None;
        }
        Some(GameAction::Play(board.with_mark(position, self.state.turn())))
    }
}
