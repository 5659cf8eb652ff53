//! Rendering tests against an in-memory terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};
use tictactoe_history::tui::{App, draw};

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("test terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw");
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

#[test]
fn test_initial_screen() {
    let app = App::new(true);
    let screen = render(&app);
    assert!(screen.contains("Next player: X"));
    assert!(screen.contains("You are at move #0 (game start)"));
    assert!(screen.contains("Sort"));
}

#[test]
fn test_screen_after_win() {
    let mut app = App::new(true);
    for key in ['1', '4', '2', '5', '3'] {
        press(&mut app, KeyCode::Char(key));
    }
    let screen = render(&app);
    assert!(screen.contains("Winner: X"));
    assert!(screen.contains("You are at move #5 (0,2)"));
    assert!(screen.contains("Go to move #4 (1,1)"));
}
