//! Stateless UI rendering.
//!
//! [`AppLayout::new`] is shared by drawing and mouse hit-testing so both
//! always agree on where each widget sits.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::app::{App, Focus};
use crate::games::tictactoe::{Player, Position, Square};
use crate::views::{BoardView, Cell, HistoryEntry, HistoryView};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    /// Title bar.
    pub title: Rect,
    /// Status line above the board.
    pub status: Rect,
    /// The nine board cells, row-major.
    pub cells: [Rect; 9],
    /// The sort button.
    pub sort: Rect,
    /// The move list, including its border.
    pub history: Rect,
    /// Key help footer.
    pub help: Rect,
}

impl AppLayout {
    /// Splits the terminal area into widget regions.
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(BOARD_HEIGHT + 3),
                Constraint::Length(3), // Help
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);

        let game = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(BOARD_HEIGHT)])
            .split(body[0]);

        let info = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(3)])
            .split(body[1]);

        Self {
            title: rows[0],
            status: game[0],
            cells: cell_rects(center_rect(game[1], BOARD_WIDTH, BOARD_HEIGHT)),
            sort: center_rect(info[0], 12, 3),
            history: info[1],
            help: rows[2],
        }
    }

    /// The board cell under the given terminal coordinates.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        let point = ratatui::layout::Position::new(column, row);
        self.cells
            .iter()
            .position(|rect| rect.contains(point))
            .and_then(Position::from_index)
    }

    /// First move list row on screen when `selected` is highlighted.
    ///
    /// The list scrolls just far enough to keep the selection on its bottom
    /// line. Drawing and hit-testing both use this offset.
    pub fn history_offset(&self, selected: Option<usize>) -> usize {
        let visible = usize::from(self.history_inner().height).max(1);
        selected.map_or(0, |row| row.saturating_sub(visible - 1))
    }

    /// The move list row (display order) under the given coordinates, with
    /// the list scrolled by `offset` rows.
    pub fn history_row_at(&self, column: u16, row: u16, offset: usize) -> Option<usize> {
        let inner = self.history_inner();
        inner
            .contains(ratatui::layout::Position::new(column, row))
            .then(|| offset + usize::from(row - inner.y))
    }

    fn history_inner(&self) -> Rect {
        self.history.inner(ratatui::layout::Margin::new(1, 1))
    }

    /// Whether the coordinates fall on the sort button.
    pub fn is_sort_button(&self, column: u16, row: u16) -> bool {
        self.sort.contains(ratatui::layout::Position::new(column, row))
    }
}

/// Renders the whole app.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, layout.title);

    let view = BoardView::new(app.state());
    let status = Paragraph::new(view.status().to_string())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout.status);

    for (cell, area) in view.cells().iter().zip(layout.cells) {
        let focused = app.focus() == Focus::Board && *cell.position() == app.cursor();
        draw_cell(frame, area, cell, focused);
    }

    draw_sort_button(frame, layout.sort, app.state().is_ascending());
    draw_history(frame, &layout, app);

    let help = Paragraph::new(
        "Arrows/1-9: pick | Enter: play/jump | Tab: board/moves | s: sort | r: restart | q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, layout.help);
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: &Cell, focused: bool) {
    let base_style = match cell.square() {
        Square::Empty => Style::default().fg(Color::DarkGray),
        Square::Occupied(Player::X) => Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD),
        Square::Occupied(Player::O) => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD),
    };

    let style = if *cell.winning() {
        base_style.bg(Color::Green).fg(Color::Black)
    } else {
        base_style
    };
    let border_style = if focused {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(cell.square().symbol(), style)))
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    frame.render_widget(paragraph, area);
}

fn draw_sort_button(frame: &mut Frame, area: Rect, ascending: bool) {
    let arrow = if ascending { "↑" } else { "↓" };
    let button = Paragraph::new(format!("Sort {}", arrow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, area);
}

fn draw_history(frame: &mut Frame, layout: &AppLayout, app: &App) {
    let rows = HistoryView::new(app.state()).rows();
    let current = app.state().current_move();
    let items: Vec<ListItem> = rows.iter().map(|entry| history_item(entry, current)).collect();

    let border_style = if app.focus() == Focus::History {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title("Moves"),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let selected = app.history_selection();
    let mut list_state = ListState::default()
        .with_selected(selected)
        .with_offset(layout.history_offset(selected));
    frame.render_stateful_widget(list, layout.history, &mut list_state);
}

fn history_item(entry: &HistoryEntry, current: usize) -> ListItem<'static> {
    let mut style = if entry.action().is_some() {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().add_modifier(Modifier::ITALIC)
    };
    if *entry.move_number() == current {
        style = style.add_modifier(Modifier::BOLD);
    }
    ListItem::new(Line::from(Span::styled(entry.label(), style)))
}

fn cell_rects(board: Rect) -> [Rect; 9] {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CELL_HEIGHT); 3])
        .spacing(1)
        .split(board);

    std::array::from_fn(|i| {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CELL_WIDTH); 3])
            .spacing(1)
            .split(rows[i / 3]);
        cols[i % 3]
    })
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
