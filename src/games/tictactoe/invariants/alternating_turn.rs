//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameState, Move, Player};
use super::Invariant;

/// Invariant: the mark added at snapshot `i` belongs to the player whose
/// turn it was at `i - 1`. The first move is always X.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .windows(2)
            .enumerate()
            .all(|(step, pair)| match Move::between(&pair[0], &pair[1]) {
                Some(mv) => mv.player() == Player::for_move(step),
                // Shape errors belong to HistoryConsistentInvariant.
                None => true,
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, Position};

    #[test]
    fn test_alternation_holds() {
        let mut state = GameState::new();
        for pos in [Position::Center, Position::TopLeft, Position::BottomRight] {
            let next = state.current_board().with_mark(pos, state.turn());
            state.play(next);
        }
        assert!(AlternatingTurnInvariant::holds(&state));
    }

    #[test]
    fn test_o_first_violates() {
        let first = Board::new().with_mark(Position::Center, Player::O);
        let state = GameState::from_parts(vec![Board::new(), first], 1);
        assert!(!AlternatingTurnInvariant::holds(&state));
    }

    #[test]
    fn test_double_move_violates() {
        let first = Board::new().with_mark(Position::Center, Player::X);
        let second = first.with_mark(Position::TopLeft, Player::X);
        let state = GameState::from_parts(vec![Board::new(), first, second], 2);
        assert!(!AlternatingTurnInvariant::holds(&state));
    }
}
