//! Tests for move list labels and ordering.

use proptest::prelude::*;
use tictactoe_history::{BoardView, GameAction, GameState, HistoryEntry, HistoryView, Position};

fn play_all(cells: &[usize]) -> GameState {
    let mut state = GameState::new();
    for &cell in cells {
        let position = Position::from_index(cell).expect("cell on board");
        let action = BoardView::new(&state).click(position).expect("legal click");
        action.apply(&mut state).expect("play never fails");
    }
    state
}

fn labels(rows: &[HistoryEntry]) -> Vec<String> {
    rows.iter().map(HistoryEntry::label).collect()
}

#[test]
fn test_fresh_game_has_static_start_entry() {
    let state = GameState::new();
    let rows = HistoryView::new(&state).rows();
    assert_eq!(labels(&rows), vec!["You are at move #0 (game start)"]);
    assert_eq!(rows[0].action(), None);
    assert_eq!(rows[0].coordinate(), None);
}

#[test]
fn test_labels_after_three_moves() {
    let state = play_all(&[4, 0, 7]);
    let rows = HistoryView::new(&state).rows();
    assert_eq!(
        labels(&rows),
        vec![
            "Go to game start",
            "Go to move #1 (1,1)",
            "Go to move #2 (0,0)",
            "You are at move #3 (2,1)",
        ]
    );
    assert_eq!(rows[1].action(), Some(GameAction::JumpTo(1)));
    assert_eq!(rows[3].action(), None);
}

#[test]
fn test_static_entry_tracks_last_move_not_current() {
    let mut state = play_all(&[4, 0, 7]);
    state.jump_to(1).expect("in range");
    let rows = HistoryView::new(&state).rows();
    assert_eq!(rows[3].label(), "You are at move #3 (2,1)");
    assert_eq!(rows[1].label(), "Go to move #1 (1,1)");
}

#[test]
fn test_descending_reverses_rows() {
    let mut state = play_all(&[4, 0]);
    state.toggle_order();
    let rows = HistoryView::new(&state).rows();
    assert_eq!(
        labels(&rows),
        vec![
            "You are at move #2 (0,0)",
            "Go to move #1 (1,1)",
            "Go to game start",
        ]
    );
    assert_eq!(HistoryView::new(&state).activate(2), Some(GameAction::JumpTo(0)));
}

proptest! {
    /// Property: sort order only reverses the rows; the static entry is always the last move.
    #[test]
    fn prop_sort_only_reverses(
        cells in prop::sample::subsequence((0usize..9).collect::<Vec<_>>(), 0..=4),
        toggles in 0usize..4
    ) {
        // Four or fewer distinct cells never complete a line for one player.
        let mut state = play_all(&cells);
        for _ in 0..toggles {
            state.toggle_order();
        }

        let view = HistoryView::new(&state);
        let entries = view.entries();
        let mut rows = view.rows();
        if !state.is_ascending() {
            rows.reverse();
        }
        prop_assert_eq!(&rows, &entries);

        let static_rows: Vec<usize> = entries
            .iter()
            .filter(|e| e.action().is_none())
            .map(|e| *e.move_number())
            .collect();
        prop_assert_eq!(static_rows, vec![state.last_move()]);
    }
}
