//! First-class move values for tic-tac-toe.
//!
//! History stores whole boards; a [`Move`] is recovered by diffing two
//! consecutive snapshots.

use super::{Board, Player, Position};
use tracing::instrument;

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Recovers the move that turned `before` into `after`.
    ///
    /// Returns `None` unless exactly one square changed, from empty to a
    /// mark.
    #[instrument(level = "trace", skip(before, after))]
    pub fn between(before: &Board, after: &Board) -> Option<Self> {
        match before.diff(after).as_slice() {
            [position] if before.is_empty(*position) => after
                .get(*position)
                .player()
                .map(|player| Self::new(player, *position)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}
