//! Validated board coordinates.

use crate::error::GameError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the board.
pub const SIZE: usize = 3;

/// A row or column number known to lie on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Index {
    /// Top row or left column.
    Zero,
    /// Middle row or column.
    One,
    /// Bottom row or right column.
    Two,
}

impl Index {
    /// All three indices in ascending order.
    pub const ALL: [Index; SIZE] = [Index::Zero, Index::One, Index::Two];

    /// Numeric value, 0-2.
    pub const fn get(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for Index {
    type Error = GameError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Index::Zero),
            1 => Ok(Index::One),
            2 => Ok(Index::Two),
            _ => Err(GameError::InvalidIndex(value)),
        }
    }
}

/// A `(row, col)` pair known to lie on the board.
///
/// Bounds are checked once, at construction. Everything past this point can
/// index the board without further validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawCoord")]
pub struct Coord {
    row: usize,
    col: usize,
}

/// Unchecked wire form of [`Coord`].
#[derive(Deserialize)]
struct RawCoord {
    row: usize,
    col: usize,
}

impl TryFrom<RawCoord> for Coord {
    type Error = GameError;

    fn try_from(raw: RawCoord) -> Result<Self, Self::Error> {
        Coord::new(raw.row, raw.col)
    }
}

impl Coord {
    /// All 9 coordinates in row-major order.
    pub const ALL: [Coord; 9] = [
        Coord::at(0, 0),
        Coord::at(0, 1),
        Coord::at(0, 2),
        Coord::at(1, 0),
        Coord::at(1, 1),
        Coord::at(1, 2),
        Coord::at(2, 0),
        Coord::at(2, 1),
        Coord::at(2, 2),
    ];

    /// Creates a coordinate, rejecting anything outside `[0, 2]`.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, GameError> {
        if row >= SIZE || col >= SIZE {
            return Err(GameError::InvalidCoordinate { row, col });
        }
        Ok(Self { row, col })
    }

    // Only used for in-range literals.
    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates a coordinate from already validated parts.
    pub const fn from_parts(row: Index, col: Index) -> Self {
        Self::at(row.get(), col.get())
    }

    /// Creates a coordinate from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * SIZE + self.col
    }

    /// Row, 0 at the top.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column, 0 at the left.
    pub fn col(self) -> usize {
        self.col
    }

    /// Human-readable label for this cell.
    pub fn label(self) -> &'static str {
        match (self.row, self.col) {
            (0, 0) => "Top-left",
            (0, 1) => "Top-center",
            (0, 2) => "Top-right",
            (1, 0) => "Middle-left",
            (1, 1) => "Center",
            (1, 2) => "Middle-right",
            (2, 0) => "Bottom-left",
            (2, 1) => "Bottom-center",
            _ => "Bottom-right",
        }
    }

    /// Parses a label (case-insensitive) or a row-major index.
    #[instrument]
    pub fn from_label_or_index(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Ok(index) = s.parse::<usize>() {
            return Self::from_index(index);
        }

        let s_lower = s.to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|coord| coord.label().to_lowercase() == s_lower)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(Coord::new(2, 2).is_ok());
        assert_eq!(
            Coord::new(3, 0),
            Err(GameError::InvalidCoordinate { row: 3, col: 0 })
        );
        assert_eq!(
            Coord::new(0, 7),
            Err(GameError::InvalidCoordinate { row: 0, col: 7 })
        );
    }

    #[test]
    fn test_index_round_trip() {
        for (index, coord) in Coord::ALL.iter().enumerate() {
            assert_eq!(coord.index(), index);
            assert_eq!(Coord::from_index(index), Some(*coord));
        }
        assert_eq!(Coord::from_index(9), None);
    }

    #[test]
    fn test_from_label_or_index() {
        assert_eq!(Coord::from_label_or_index("center"), Some(Coord::at(1, 1)));
        assert_eq!(Coord::from_label_or_index(" 8 "), Some(Coord::at(2, 2)));
        assert_eq!(Coord::from_label_or_index("Top-right"), Some(Coord::at(0, 2)));
        assert_eq!(Coord::from_label_or_index("nowhere"), None);
    }

    #[test]
    fn test_index_try_from() {
        assert_eq!(Index::try_from(2), Ok(Index::Two));
        assert_eq!(Index::try_from(3), Err(GameError::InvalidIndex(3)));
        for index in Index::ALL {
            assert_eq!(Index::try_from(index.get()), Ok(index));
        }
    }

    #[test]
    fn test_deserialize_validates_bounds() {
        let coord: Coord = toml::from_str("row = 2\ncol = 1").expect("on the board");
        assert_eq!(coord, Coord::at(2, 1));

        let err = toml::from_str::<Coord>("row = 7\ncol = 0").unwrap_err();
        assert!(err.to_string().contains("Coordinate (7, 0) is off the board"));
    }
}
