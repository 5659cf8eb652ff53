//! Application state and input handling.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::{debug, info, instrument, warn};

use super::input::{Command, command_for, move_cursor};
use super::ui::AppLayout;
use crate::games::tictactoe::{GameState, Position};
use crate::views::{BoardView, GameAction, HistoryView};

/// Which widget receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 board.
    #[default]
    Board,
    /// The move list.
    History,
}

impl Focus {
    fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// Main application state.
///
/// Owns the [`GameState`]; views get it by shared reference and every
/// change goes through [`App::apply`].
#[derive(Debug)]
pub struct App {
    state: GameState,
    initial_ascending: bool,
    cursor: Position,
    focus: Focus,
    history_row: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application with the given initial move list order.
    #[instrument]
    pub fn new(ascending: bool) -> Self {
        Self {
            state: GameState::with_order(ascending),
            initial_ascending: ascending,
            cursor: Position::Center,
            focus: Focus::Board,
            history_row: 0,
            should_quit: false,
        }
    }

    /// The game being played.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Board square under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Widget with keyboard focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected move list row, in display order.
    pub fn history_row(&self) -> usize {
        self.history_row.min(self.state.last_move())
    }

    /// Highlighted move list row, if the list has focus.
    pub fn history_selection(&self) -> Option<usize> {
        (self.focus == Focus::History).then(|| self.history_row())
    }

    /// Whether the event loop should stop.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies a view action to the game.
    ///
    /// Jump targets always come from the move list, so an out-of-range jump
    /// is a bug: it asserts in debug builds and is ignored in release.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: GameAction) {
        if let Err(e) = action.apply(&mut self.state) {
            warn!(error = %e, "Rejected game action");
            debug_assert!(false, "rejected game action: {e}");
        }
    }

    /// Clicks a board square.
    #[instrument(skip(self))]
    pub fn click(&mut self, position: Position) {
        self.cursor = position;
        if let Some(action) = BoardView::new(&self.state).click(position) {
            self.apply(action);
        }
    }

    /// Activates the move list row at `row` (display order).
    #[instrument(skip(self))]
    pub fn activate_history_row(&mut self, row: usize) {
        self.history_row = row;
        match HistoryView::new(&self.state).activate(row) {
            Some(action) => self.apply(action),
            None => debug!("Row is not a jump target"),
        }
    }

    /// Starts a fresh game.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.state = GameState::with_order(self.initial_ascending);
        self.history_row = 0;
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        let Some(command) = command_for(key) else {
            return;
        };
        debug!(?command, "Handling command");

        match command {
            Command::Quit => self.should_quit = true,
            Command::Restart => self.restart(),
            Command::ToggleOrder => self.apply(GameAction::ToggleOrder),
            Command::SwitchFocus => self.focus = self.focus.toggle(),
            Command::PlaceAt(position) => self.click(position),
            Command::Select => match self.focus {
                Focus::Board => self.click(self.cursor),
                Focus::History => self.activate_history_row(self.history_row()),
            },
            Command::Move(code) => match self.focus {
                Focus::Board => self.cursor = move_cursor(self.cursor, code),
                Focus::History => self.move_history_selection(code),
            },
        }
    }

    /// Handles a mouse event against the layout of the last frame.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let layout = AppLayout::new(area);
        let offset = layout.history_offset(self.history_selection());
        let (column, row) = (mouse.column, mouse.row);

        if let Some(position) = layout.cell_at(column, row) {
            self.focus = Focus::Board;
            self.click(position);
        } else if layout.is_sort_button(column, row) {
            self.apply(GameAction::ToggleOrder);
        } else if let Some(history_row) = layout.history_row_at(column, row, offset)
            && history_row <= self.state.last_move()
        {
            self.focus = Focus::History;
            self.activate_history_row(history_row);
        }
    }

    fn move_history_selection(&mut self, code: KeyCode) {
        let row = self.history_row();
        self.history_row = match code {
            KeyCode::Up => row.saturating_sub(1),
            KeyCode::Down => (row + 1).min(self.state.last_move()),
            _ => row,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::ui::draw;
    use crossterm::event::KeyModifiers;
    use ratatui::{Terminal, backend::TestBackend};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn left_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_enter_plays_at_cursor() {
        let mut app = App::new(true);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state().history().len(), 2);
        assert!(!app.state().current_board().is_empty(Position::Center));
    }

    #[test]
    fn test_history_navigation_jumps() {
        let mut app = App::new(true);
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus(), Focus::History);

        // Row 0 in ascending order is the game start.
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state().current_move(), 0);
        assert_eq!(app.state().history().len(), 3);
    }

    #[test]
    fn test_latest_row_is_not_a_jump() {
        let mut app = App::new(false);
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('2'));
        app.activate_history_row(1);
        assert_eq!(app.state().current_move(), 1);

        // Descending: row 0 is the latest move and stays static.
        app.activate_history_row(0);
        assert_eq!(app.state().current_move(), 1);
    }

    #[test]
    fn test_restart_keeps_initial_order() {
        let mut app = App::new(false);
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.state(), &GameState::with_order(false));
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(true);
        assert!(!app.should_quit());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_mouse_click_on_cell() {
        let area = Rect::new(0, 0, 100, 30);
        let layout = AppLayout::new(area);
        let target = layout.cells[8];
        let mut app = App::new(true);
        app.handle_mouse(left_click(target.x + 1, target.y + 1), area);
        assert!(!app.state().current_board().is_empty(Position::BottomRight));
    }

    #[test]
    fn test_mouse_click_on_scrolled_history() {
        let area = Rect::new(0, 0, 100, 20);
        let mut app = App::new(true);
        for key in ['1', '2', '3', '5', '4', '6', '8', '7', '9'] {
            press(&mut app, KeyCode::Char(key));
        }
        assert_eq!(app.state().last_move(), 9);

        press(&mut app, KeyCode::Tab);
        for _ in 0..9 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.history_row(), 9);

        // The list only fits 9 rows, so selecting row 9 scrolls past row 0.
        let mut terminal = Terminal::new(TestBackend::new(area.width, area.height))
            .expect("terminal");
        terminal.draw(|f| draw(f, &app)).expect("draw");

        let layout = AppLayout::new(area);
        let top = layout.history.y + 1;
        let buffer = terminal.backend().buffer();
        let top_line: String = (layout.history.x..layout.history.right())
            .map(|x| buffer[(x, top)].symbol())
            .collect();
        assert!(top_line.contains("Go to move #1 (0,0)"), "{top_line}");

        app.handle_mouse(left_click(layout.history.x + 3, top), area);
        assert_eq!(app.state().current_move(), 1);
        assert_eq!(app.history_row(), 1);
    }
}
