//! Non-interactive replay of a sequence of clicks.
//!
//! Runs the same click path as the TUI and renders the result as plain
//! text, which makes games easy to script and diff.

use crate::games::tictactoe::{GameState, HistoryError, Position};
use crate::views::{BoardView, HistoryView};
use derive_more::{Display, Error, From};
use tracing::{debug, info, instrument};

/// Errors from [`replay`].
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum ReplayError {
    /// A click named a square outside 0-8.
    #[display("Cell {} is not on the board (expected 0-8)", _0)]
    InvalidCell(#[error(not(source))] usize),
    /// The final jump was out of range.
    #[display("{}", _0)]
    #[from]
    History(HistoryError),
}

/// Clicks `cells` in order, then optionally jumps to `jump`.
///
/// Clicks on taken squares or finished boards are ignored exactly as in the
/// interactive UI.
///
/// # Errors
///
/// Returns [`ReplayError::InvalidCell`] for an index above 8 and
/// [`ReplayError::History`] when `jump` is not a recorded move.
#[instrument]
pub fn replay(
    cells: &[usize],
    jump: Option<usize>,
    ascending: bool,
) -> Result<GameState, ReplayError> {
    let mut state = GameState::with_order(ascending);

    for &cell in cells {
        let position = Position::from_index(cell).ok_or(ReplayError::InvalidCell(cell))?;
        match BoardView::new(&state).click(position) {
            Some(action) => action.apply(&mut state)?,
            None => debug!(cell, "Click ignored"),
        }
    }

    if let Some(target) = jump {
        state.jump_to(target)?;
    }

    info!(moves = state.last_move(), current = state.current_move(), "Replay finished");
    Ok(state)
}

/// Renders the board, status line and move list as text.
///
/// The displayed snapshot's row in the move list is prefixed with `>`.
pub fn render_text(state: &GameState) -> String {
    let view = BoardView::new(state);
    let mut out = view.board().display();
    out.push_str("\n\n");
    out.push_str(&view.status().to_string());
    out.push('\n');
    if let Some(line) = view.winning_line() {
        let [a, b, c] = line.indices();
        out.push_str(&format!("Winning squares: {a}, {b}, {c}\n"));
    }
    out.push('\n');

    for entry in HistoryView::new(state).rows() {
        let marker = if *entry.move_number() == state.current_move() {
            '>'
        } else {
            ' '
        };
        out.push_str(&format!("{marker} {}\n", entry.label()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_ignores_repeated_clicks() {
        let state = replay(&[0, 0, 4], None, true).expect("valid");
        assert_eq!(state.last_move(), 2);
    }

    #[test]
    fn test_replay_rejects_off_board_cell() {
        assert_eq!(replay(&[9], None, true), Err(ReplayError::InvalidCell(9)));
    }

    #[test]
    fn test_replay_jump_out_of_range() {
        let err = replay(&[0], Some(5), true).unwrap_err();
        assert_eq!(
            err,
            ReplayError::History(HistoryError::OutOfRange {
                requested: 5,
                len: 2
            })
        );
    }

    #[test]
    fn test_render_text() {
        let state = replay(&[0, 4], Some(1), false).expect("valid");
        let text = render_text(&state);
        assert_eq!(
            text,
            concat!(
                "X|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9\n",
                "\n",
                "Next player: O\n",
                "\n",
                "  You are at move #2 (1,1)\n",
                "> Go to move #1 (0,0)\n",
                "  Go to game start\n",
            )
        );
    }

    #[test]
    fn test_render_text_lists_winning_squares() {
        let state = replay(&[0, 3, 1, 4, 2], None, true).expect("valid");
        let text = render_text(&state);
        assert!(text.starts_with("X|X|X\n-+-+-\nO|O|6\n-+-+-\n7|8|9\n\n"));
        assert!(text.contains("Winner: X\nWinning squares: 0, 1, 2\n\n"));
        assert!(text.ends_with("> You are at move #5 (0,2)\n"));
    }
}
