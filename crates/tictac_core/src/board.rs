//! The 3x3 board.

use crate::cell::Cell;
use crate::coord::{Coord, SIZE};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Gets the cell at the given coordinate.
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.row()][coord.col()]
    }

    /// Sets the cell at the given coordinate.
    ///
    /// Does not check whether the cell is already occupied; callers decide
    /// whether overwriting is legal.
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.row()][coord.col()] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord).is_empty()
    }

    /// Returns true if no cell is empty.
    #[instrument(skip(self))]
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Empty cells in row-major order, as of this call.
    #[instrument(skip(self))]
    pub fn empty_cells(&self) -> Vec<Coord> {
        Coord::ALL
            .iter()
            .copied()
            .filter(|&coord| self.is_empty(coord))
            .collect()
    }

    /// Resets every cell to empty.
    pub fn clear(&mut self) {
        self.cells = [[Cell::Empty; SIZE]; SIZE];
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            let line: Vec<String> = row.iter().map(|cell| cell.symbol().to_string()).collect();
            write!(f, " {} ", line.join(" | "))?;
            if r < SIZE - 1 {
                write!(f, "\n---+---+---\n")?;
            }
        }
        Ok(())
    }
}
