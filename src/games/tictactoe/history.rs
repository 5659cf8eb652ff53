//! Game history with time travel.
//!
//! [`GameState`] is the single source of truth for the whole application.
//! Everything shown on screen (whose turn it is, the status line, move
//! labels) is derived from it on read.

use super::error::HistoryError;
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::{Board, Player};
use tracing::{debug, instrument, warn};

/// Every board snapshot played so far, plus the one being viewed.
///
/// Mutated only through [`play`](Self::play), [`jump_to`](Self::jump_to)
/// and [`toggle_order`](Self::toggle_order).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    history: Vec<Board>,
    current_move: usize,
    ascending: bool,
}

impl GameState {
    /// Creates a fresh game: one empty board, move 0, ascending order.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(true)
    }

    /// Creates a fresh game with the given initial history order.
    #[instrument]
    pub fn with_order(ascending: bool) -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
            ascending,
        }
    }

    /// Builds a state directly, skipping every check.
    #[cfg(test)]
    pub(crate) fn from_parts(history: Vec<Board>, current_move: usize) -> Self {
        Self {
            history,
            current_move,
            ascending: true,
        }
    }

    /// All snapshots, oldest first. Index 0 is the empty board.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the snapshot currently displayed.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Index of the most recently played snapshot.
    pub fn last_move(&self) -> usize {
        self.history.len() - 1
    }

    /// Whether the move list is shown oldest first.
    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    /// The snapshot currently displayed.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// The player to move from the current snapshot.
    pub fn turn(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// Records `next` as the move after the current snapshot.
    ///
    /// Any snapshots after the current one are discarded first, so playing
    /// from an earlier point starts a new branch.
    #[instrument(
        skip(self, next),
        fields(current_move = self.current_move, len = self.history.len())
    )]
    pub fn play(&mut self, next: Board) {
        let discarded = self.history.len() - (self.current_move + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding future moves");
        }
        self.history.truncate(self.current_move + 1);
        self.history.push(next);
        self.current_move = self.history.len() - 1;
        debug!(current_move = self.current_move, "Move played");

        if cfg!(debug_assertions)
            && let Err(violations) = TicTacToeInvariants::check_all(self)
        {
            for violation in &violations {
                warn!(%violation, "History invariant violated");
            }
        }
    }

    /// Displays the snapshot at `target` without changing the history.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::OutOfRange`] if `target` is not a snapshot
    /// index; the state is left untouched.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, target: usize) -> Result<(), HistoryError> {
        if target >= self.history.len() {
            return Err(HistoryError::OutOfRange {
                requested: target,
                len: self.history.len(),
            });
        }
        self.current_move = target;
        debug!(current_move = target, "Jumped to move");
        Ok(())
    }

    /// Flips the order in which the move list is displayed.
    #[instrument(skip(self))]
    pub fn toggle_order(&mut self) {
        self.ascending = !self.ascending;
        debug!(ascending = self.ascending, "Toggled history order");
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
