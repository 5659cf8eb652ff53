//! The move list.

use super::GameAction;
use crate::games::tictactoe::{GameState, Move};
use tracing::instrument;

/// One row of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_getters::Getters)]
pub struct HistoryEntry {
    /// Snapshot index this row refers to.
    move_number: usize,
    /// The move that produced the snapshot; `None` for the start.
    played: Option<Move>,
    /// Whether this is the most recently played snapshot.
    latest: bool,
}

impl HistoryEntry {
    /// Coordinate of the move as `"row,col"`, or `None` at game start.
    pub fn coordinate(&self) -> Option<String> {
        self.played.map(|mv| mv.position().coordinate())
    }

    /// Text shown for this row.
    ///
    /// The latest row reads "You are at move #n (r,c)". Other rows describe
    /// the jump they trigger.
    pub fn label(&self) -> String {
        let n = self.move_number;
        match (self.latest, self.coordinate()) {
            (true, Some(coord)) => format!("You are at move #{n} ({coord})"),
            (true, None) => format!("You are at move #{n} (game start)"),
            (false, Some(coord)) => format!("Go to move #{n} ({coord})"),
            (false, None) => "Go to game start".to_string(),
        }
    }

    /// The jump this row triggers, or `None` for the latest row.
    pub fn action(&self) -> Option<GameAction> {
        (!self.latest).then_some(GameAction::JumpTo(self.move_number))
    }
}

/// Read-only view of the move list.
#[derive(Debug, Clone, Copy)]
pub struct HistoryView<'a> {
    state: &'a GameState,
}

impl<'a> HistoryView<'a> {
    /// Creates a view over `state`.
    pub fn new(state: &'a GameState) -> Self {
        Self { state }
    }

    /// Rows in play order, oldest first.
    #[instrument(level = "trace", skip(self))]
    pub fn entries(&self) -> Vec<HistoryEntry> {
        let history = self.state.history();
        let last = self.state.last_move();
        history
            .iter()
            .enumerate()
            .map(|(move_number, board)| HistoryEntry {
                move_number,
                played: move_number
                    .checked_sub(1)
                    .and_then(|prev| Move::between(&history[prev], board)),
                latest: move_number == last,
            })
            .collect()
    }

    /// Rows in display order: play order when ascending, reversed otherwise.
    pub fn rows(&self) -> Vec<HistoryEntry> {
        let mut entries = self.entries();
        if !self.state.is_ascending() {
            entries.reverse();
        }
        entries
    }

    /// The action for the row at `row` in display order.
    pub fn activate(&self, row: usize) -> Option<GameAction> {
        self.rows().get(row).and_then(HistoryEntry::action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    fn state_after(positions: &[Position]) -> GameState {
        let mut state = GameState::new();
        for pos in positions {
            let next = state.current_board().with_mark(*pos, state.turn());
            state.play(next);
        }
        state
    }

    #[test]
    fn test_single_entry_at_start() {
        let state = GameState::new();
        let entries = HistoryView::new(&state).entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].label(), "You are at move #0 (game start)");
        assert_eq!(entries[0].action(), None);
    }

    #[test]
    fn test_labels_use_coordinates() {
        let state = state_after(&[Position::TopLeft, Position::MiddleRight]);
        let labels: Vec<_> = HistoryView::new(&state)
            .entries()
            .iter()
            .map(HistoryEntry::label)
            .collect();
        assert_eq!(
            labels,
            vec![
                "Go to game start",
                "Go to move #1 (0,0)",
                "You are at move #2 (1,2)",
            ]
        );
    }

    #[test]
    fn test_activate_follows_display_order() {
        let mut state = state_after(&[Position::TopLeft, Position::Center]);
        state.toggle_order();
        let view = HistoryView::new(&state);
        assert_eq!(view.activate(0), None);
        assert_eq!(view.activate(1), Some(GameAction::JumpTo(1)));
        assert_eq!(view.activate(2), Some(GameAction::JumpTo(0)));
        assert_eq!(view.activate(3), None);
    }
}
