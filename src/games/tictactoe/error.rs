//! History navigation errors.

use derive_more::{Display, Error};

/// Error returned by [`GameState::jump_to`](super::GameState::jump_to).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum HistoryError {
    /// The requested move is not in the history.
    #[display("Move #{} is out of range (history has {} snapshots)", requested, len)]
    OutOfRange {
        /// Requested move index.
        requested: usize,
        /// Number of snapshots in the history.
        len: usize,
    },
}
