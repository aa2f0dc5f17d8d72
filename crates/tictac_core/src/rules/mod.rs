//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here mutates state, so evaluating
//! the same board twice always gives the same answer.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::winning_line;

use crate::board::Board;
use crate::outcome::Outcome;
use crate::player::Player;
use tracing::{debug, instrument};

/// Evaluates the board and maps a winning marker back to its owner.
///
/// Lines are scanned rows, columns, main diagonal, anti-diagonal. A full board
/// with no completed line is a draw.
#[instrument(skip_all)]
pub fn check_winner(board: &Board, human: &Player, computer: &Player) -> Outcome {
    if let Some((line, marker)) = winning_line(board) {
        let outcome = if marker == human.marker() {
            Outcome::win_for(human.identity())
        } else {
            Outcome::win_for(computer.identity())
        };
        debug!(?line, %marker, %outcome, "Line completed");
        return outcome;
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
