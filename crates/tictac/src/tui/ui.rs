//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};
use tictac_core::{Cell, Coord, Marker, SIZE};

use super::app::App;

const CELL_WIDTH: u16 = 11;
const CELL_HEIGHT: u16 = 3;

/// Renders the whole screen and returns where each cell was drawn.
pub fn draw(frame: &mut Frame, app: &App) -> [[Rect; SIZE]; SIZE] {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let areas = draw_board(frame, chunks[1], app);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("click or 1-9 to play | arrows + enter | r restart | q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    areas
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) -> [[Rect; SIZE]; SIZE] {
    let board_area = center_rect(area, CELL_WIDTH * 3 + 2, CELL_HEIGHT * 3 + 2);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    let mut areas = [[Rect::default(); SIZE]; SIZE];
    for (r, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        areas[r] = draw_row(frame, row_area, app, r);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
    areas
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, row: usize) -> [Rect; SIZE] {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area);

    let cells = [cols[0], cols[2], cols[4]];
    for (col, cell_area) in cells.iter().enumerate() {
        if let Ok(coord) = Coord::new(row, col) {
            draw_cell(frame, *cell_area, app, coord);
        }
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
    cells
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, coord: Coord) {
    let (symbol, base_style) = match app.session().board().get(coord) {
        Cell::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Cell::Occupied(Marker::X) => (
            " X ",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Marker::O) => (
            " O ",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
    };

    let on_winning_line = app.winning_line().is_some_and(|line| line.contains(coord));
    let style = if on_winning_line {
        base_style.bg(Color::Magenta)
    } else if coord == app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let text = Text::from(vec![
        Line::from(""),
        Line::from(Span::styled(symbol, style)),
        Line::from(""),
    ]);
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = (0..area.height).map(|_| Line::from("│")).collect();
    let sep = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
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

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};
    use tictac_core::Session;

    #[test]
    fn test_cells_do_not_overlap() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = App::new(Session::new(Marker::O, Some(1)));

        let mut areas = [[Rect::default(); SIZE]; SIZE];
        terminal.draw(|frame| areas = draw(frame, &app)).unwrap();

        for a in Coord::ALL {
            let ra = areas[a.row()][a.col()];
            assert_eq!(ra.width, CELL_WIDTH);
            for b in Coord::ALL {
                if a != b {
                    assert!(!ra.intersects(areas[b.row()][b.col()]), "{a} overlaps {b}");
                }
            }
        }
    }

    #[test]
    fn test_renders_markers_and_status() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = App::new(Session::new(Marker::O, Some(1)));
        app.handle_key(crossterm::event::KeyCode::Char('5'));

        terminal
            .draw(|frame| {
                draw(frame, &app);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let screen: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(screen.contains("Tic Tac Toe"));
        assert!(screen.contains('O'));
        assert!(screen.contains('X'));
        assert!(screen.contains("You played Center."));
    }
}
