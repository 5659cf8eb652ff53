//! Monotonic board invariant: squares never change once set.

use super::super::{Board, GameState, Position, Square};
use super::Invariant;

/// Invariant: history starts from an empty board and squares only go from
/// empty to occupied, never back and never to the other player.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        let starts_empty = history.first() == Some(&Board::new());

        starts_empty
            && history.windows(2).all(|pair| {
                Position::ALL.into_iter().all(|pos| {
                    let before = pair[0].get(pos);
                    before == Square::Empty || before == pair[1].get(pos)
                })
            })
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
