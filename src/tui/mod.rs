//! Terminal UI.

mod app;
mod input;
mod ui;

pub use app::{App, Focus};
pub use input::{Command, command_for, move_cursor};
pub use ui::{AppLayout, draw};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend, layout::Rect};
use std::io;
use tracing::{debug, info, instrument, warn};

/// Restores the terminal on drop, including on early return or panic unwind.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to disable raw mode");
        }
        if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture) {
            warn!(error = %e, "Failed to leave alternate screen");
        }
    }
}

/// Runs the interactive game until the user quits.
#[instrument]
pub fn run_tui(ascending: bool) -> Result<()> {
    info!("Starting TUI");

    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    let mut app = App::new(ascending);
    let res = run_app(&mut terminal, &mut app);
    terminal.show_cursor()?;

    info!(moves = app.state().last_move(), "TUI exited");
    res
}

/// Draw/read loop. Blocks on input between frames.
#[instrument(skip_all)]
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    let mut area = Rect::default();

    while !app.should_quit() {
        terminal.draw(|frame| {
            area = frame.area();
            draw(frame, app);
        })?;

        match event::read()? {
            // Skip key release events (crossterm fires both press and release on some platforms).
            Event::Key(key) if key.kind != KeyEventKind::Release => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse, area),
            _ => {}
        }
    }

    Ok(())
}
