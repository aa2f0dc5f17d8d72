//! Domain errors.

use crate::coord::Coord;
use crate::outcome::Outcome;

/// Error that can occur when applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// Row or column outside `[0, 2]`.
    #[display("Coordinate ({}, {}) is off the board", row, col)]
    InvalidCoordinate {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// Row or column number outside `[0, 2]`.
    #[display("Index {} is off the board", _0)]
    InvalidIndex(usize),

    /// The target cell already holds a marker.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Coord),

    /// The game has already reached a terminal outcome.
    #[display("Game is already over: {}", _0)]
    GameOver(Outcome),
}

impl std::error::Error for GameError {}
