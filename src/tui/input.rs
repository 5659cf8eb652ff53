//! Keyboard mapping and cursor movement.

use crate::games::tictactoe::Position;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Leave the app.
    Quit,
    /// Start a fresh game.
    Restart,
    /// Flip the move list order.
    ToggleOrder,
    /// Switch focus between board and move list.
    SwitchFocus,
    /// Arrow key.
    Move(KeyCode),
    /// Enter or space on the focused widget.
    Select,
    /// Digit key 1-9: click that square directly.
    PlaceAt(Position),
}

/// Maps a key event to a command, or `None` for unbound keys.
pub fn command_for(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char('r') => Some(Command::Restart),
        KeyCode::Char('s') => Some(Command::ToggleOrder),
        KeyCode::Tab | KeyCode::BackTab => Some(Command::SwitchFocus),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Select),
        code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
            Some(Command::Move(code))
        }
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|d| (d as usize).checked_sub(1))
            .and_then(Position::from_index)
            .map(Command::PlaceAt),
        _ => None,
    }
}

/// Moves the board cursor one square; stops at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let next = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };
    next.and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}
