//! The eight winning lines.

use crate::board::Board;
use crate::cell::{Cell, Marker};
use crate::coord::{Coord, Index};
use serde::{Deserialize, Serialize};

/// A winning triple: one of 3 rows, 3 columns or 2 diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// A full row.
    Row(Index),
    /// A full column.
    Column(Index),
    /// (0,0) - (1,1) - (2,2).
    MainDiagonal,
    /// (0,2) - (1,1) - (2,0).
    AntiDiagonal,
}

impl Line {
    /// Every line, in scan order: rows, columns, main diagonal, anti-diagonal.
    pub const ALL: [Line; 8] = [
        Line::Row(Index::Zero),
        Line::Row(Index::One),
        Line::Row(Index::Two),
        Line::Column(Index::Zero),
        Line::Column(Index::One),
        Line::Column(Index::Two),
        Line::MainDiagonal,
        Line::AntiDiagonal,
    ];

    /// The three coordinates on this line.
    pub fn coords(self) -> [Coord; 3] {
        match self {
            Line::Row(r) => Index::ALL.map(|c| Coord::from_parts(r, c)),
            Line::Column(c) => Index::ALL.map(|r| Coord::from_parts(r, c)),
            Line::MainDiagonal => [Coord::at(0, 0), Coord::at(1, 1), Coord::at(2, 2)],
            Line::AntiDiagonal => [Coord::at(0, 2), Coord::at(1, 1), Coord::at(2, 0)],
        }
    }

    /// Returns true if `coord` lies on this line.
    pub fn contains(self, coord: Coord) -> bool {
        self.coords().contains(&coord)
    }

    /// Marker filling all three cells, if any.
    pub fn owner(self, board: &Board) -> Option<Marker> {
        let [a, b, c] = self.coords().map(|coord| board.get(coord));
        match a {
            Cell::Occupied(marker) if a == b && b == c => Some(marker),
            _ => None,
        }
    }

    /// The empty cell that would complete this line for `marker`.
    ///
    /// Some only when `marker` holds exactly two cells and the third is empty.
    pub fn completing_cell(self, board: &Board, marker: Marker) -> Option<Coord> {
        let mut count = 0;
        let mut empty = None;
        for coord in self.coords() {
            match board.get(coord) {
                Cell::Occupied(m) if m == marker => count += 1,
                Cell::Empty => empty = Some(coord),
                Cell::Occupied(_) => {}
            }
        }
        if count == 2 { empty } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;

    #[test]
    fn test_lines_cover_each_cell() {
        // Corners sit on 3 lines, edges on 2, the center on 4.
        let count = |coord| Line::ALL.iter().filter(|l| l.contains(coord)).count();
        assert_eq!(count(Coord::at(0, 0)), 3);
        assert_eq!(count(Coord::at(0, 1)), 2);
        assert_eq!(count(Coord::at(1, 1)), 4);
    }

    #[test]
    fn test_owner() {
        let mut board = Board::new();
        for coord in Line::AntiDiagonal.coords() {
            board.set(coord, Marker::O.into());
        }
        assert_eq!(Line::AntiDiagonal.owner(&board), Some(Marker::O));
        assert_eq!(Line::MainDiagonal.owner(&board), None);
        assert_eq!(Line::Row(Index::Zero).owner(&board), None);
    }

    #[test]
    fn test_completing_cell() {
        let mut board = Board::new();
        board.set(Coord::at(0, 1), Marker::X.into());
        board.set(Coord::at(2, 1), Marker::X.into());
        assert_eq!(
            Line::Column(Index::One).completing_cell(&board, Marker::X),
            Some(Coord::at(1, 1))
        );
        assert_eq!(Line::Column(Index::One).completing_cell(&board, Marker::O), None);

        board.set(Coord::at(1, 1), Marker::O.into());
        assert_eq!(Line::Column(Index::One).completing_cell(&board, Marker::X), None);
    }

    #[test]
    fn test_rows_and_columns_stay_on_the_board() {
        let board = Board::new();
        for index in 0..4 {
            match Index::try_from(index) {
                Ok(index) => {
                    assert_eq!(Line::Row(index).owner(&board), None);
                    assert_eq!(Line::Column(index).completing_cell(&board, Marker::X), None);
                }
                Err(e) => assert_eq!(e, GameError::InvalidIndex(3)),
            }
        }
    }

    #[derive(Debug, Deserialize)]
    struct Stored {
        line: Line,
    }

    #[test]
    fn test_deserialize_rejects_unknown_index() {
        let stored: Stored = toml::from_str("line = { Row = \"Two\" }").expect("valid line");
        assert_eq!(stored.line, Line::Row(Index::Two));
        assert!(toml::from_str::<Stored>("line = { Row = 3 }").is_err());
    }
}
