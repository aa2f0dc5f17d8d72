//! Cell states and player markers.

use serde::{Deserialize, Serialize};

/// Symbol a player places on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
pub enum Marker {
    /// Cross. Owned by the computer unless configured otherwise.
    X,
    /// Nought. Owned by the human unless configured otherwise.
    O,
}

impl Marker {
    /// Returns the other marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }

    /// Character drawn for this marker.
    pub fn symbol(self) -> char {
        match self {
            Marker::X => 'X',
            Marker::O => 'O',
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a marker.
    Occupied(Marker),
}

impl Cell {
    /// Returns true if no marker has been placed.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Character drawn for this cell; a space when empty.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Occupied(marker) => marker.symbol(),
        }
    }
}

impl From<Marker> for Cell {
    fn from(marker: Marker) -> Self {
        Cell::Occupied(marker)
    }
}
