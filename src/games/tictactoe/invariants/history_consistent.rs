//! History consistency invariant: one new mark per snapshot.

use super::super::{GameState, Move};
use super::Invariant;

/// Invariant: each snapshot adds exactly one mark to the previous one,
/// and the current move points into the history.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        state.current_move() < history.len()
            && history
                .windows(2)
                .all(|pair| Move::between(&pair[0], &pair[1]).is_some())
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark and the current move is in range"
    }
}
