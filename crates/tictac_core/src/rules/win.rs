//! Win detection logic for tic-tac-toe.

use crate::board::Board;
use crate::cell::Marker;
use crate::line::Line;
use tracing::instrument;

/// Returns the first completed line and the marker that filled it.
///
/// Scan order is rows, columns, main diagonal, anti-diagonal.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Line, Marker)> {
    Line::ALL
        .iter()
        .find_map(|&line| line.owner(board).map(|marker| (line, marker)))
}
