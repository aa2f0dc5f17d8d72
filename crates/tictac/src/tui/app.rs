//! Application state and input handling.

use super::input::{digit_to_coord, move_cursor};
use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use tictac_core::{Coord, GameError, Line, Outcome, SIZE, Session, Turn, winning_line};
use tracing::{debug, info, instrument, warn};

const START_MESSAGE: &str = "Your turn. Click on a cell.";

/// Main application state.
pub struct App {
    session: Session,
    cursor: Coord,
    status_message: String,
    /// Screen areas of the cells from the last draw, for mouse hit testing.
    cell_areas: [[Rect; SIZE]; SIZE],
    should_quit: bool,
}

impl App {
    /// Creates a new application around `session`.
    pub fn new(session: Session) -> Self {
        Self {
            session,
            cursor: Coord::ALL[4],
            status_message: START_MESSAGE.to_string(),
            cell_areas: [[Rect::default(); SIZE]; SIZE],
            should_quit: false,
        }
    }

    /// Gets the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Gets the keyboard cursor.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Returns true once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Completed line to highlight, if any.
    pub fn winning_line(&self) -> Option<Line> {
        winning_line(self.session.board()).map(|(line, _)| line)
    }

    /// Records where the cells were drawn.
    pub fn set_cell_areas(&mut self, areas: [[Rect; SIZE]; SIZE]) {
        self.cell_areas = areas;
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.select(self.cursor),
            KeyCode::Char(c) => {
                if let Some(coord) = digit_to_coord(c) {
                    self.cursor = coord;
                    self.select(coord);
                }
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            _ => {}
        }
    }

    /// Handles a left click at terminal position `(column, row)`.
    #[instrument(skip(self))]
    pub fn handle_click(&mut self, column: u16, row: u16) {
        if let Some(coord) = self.cell_at(column, row) {
            self.cursor = coord;
            self.select(coord);
        }
    }

    fn cell_at(&self, column: u16, row: u16) -> Option<Coord> {
        Coord::ALL.iter().copied().find(|coord| {
            let area = self.cell_areas[coord.row()][coord.col()];
            column >= area.x
                && column < area.x.saturating_add(area.width)
                && row >= area.y
                && row < area.y.saturating_add(area.height)
        })
    }

    /// Plays the human move at `coord` and reports the result.
    fn select(&mut self, coord: Coord) {
        match self.session.play(coord) {
            Ok(turn) => self.status_message = describe_turn(&turn),
            Err(GameError::CellOccupied(_)) => {
                debug!(%coord, "Ignoring click on occupied cell");
                self.status_message = "That cell is taken. Pick another.".to_string();
            }
            Err(GameError::GameOver(_)) => {
                debug!("Ignoring move after game over");
            }
            Err(e) => {
                warn!(error = %e, "Move rejected");
                self.status_message = e.to_string();
            }
        }
    }

    /// Starts a new game. Only available once the current one has ended.
    pub fn restart(&mut self) {
        if !self.session.outcome().is_terminal() {
            return;
        }
        debug!("Restarting game");
        self.session.reset();
        self.cursor = Coord::ALL[4];
        self.status_message = START_MESSAGE.to_string();
    }
}

fn describe_turn(turn: &Turn) -> String {
    match turn.outcome {
        Outcome::InProgress => match turn.computer {
            Some(reply) => format!(
                "You played {}. Computer played {}. Your turn.",
                turn.human.label(),
                reply.coord.label()
            ),
            None => "Your turn.".to_string(),
        },
        outcome => end_message(outcome),
    }
}

/// Text shown once the game has ended.
pub fn end_message(outcome: Outcome) -> String {
    match outcome.winner() {
        Some(winner) => format!("{} wins! Press 'r' to restart or 'q' to quit.", winner),
        None => "It's a draw! Press 'r' to restart or 'q' to quit.".to_string(),
    }
}
