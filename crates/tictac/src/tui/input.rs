//! Keyboard navigation and cell shortcuts.

use crossterm::event::KeyCode;
use tictac_core::{Coord, SIZE};

/// Moves the cursor one cell with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Coord, key: KeyCode) -> Coord {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(SIZE - 1), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(SIZE - 1)),
        _ => (row, col),
    };
    Coord::new(row, col).unwrap_or(cursor)
}

/// Maps the digits 1-9 onto cells, numbered left to right, top to bottom.
pub fn digit_to_coord(c: char) -> Option<Coord> {
    let digit = c.to_digit(10)? as usize;
    if digit == 0 {
        return None;
    }
    Coord::from_index(digit - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(row: usize, col: usize) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn test_arrows_move_one_cell() {
        let center = coord(1, 1);
        assert_eq!(move_cursor(center, KeyCode::Up), coord(0, 1));
        assert_eq!(move_cursor(center, KeyCode::Down), coord(2, 1));
        assert_eq!(move_cursor(center, KeyCode::Left), coord(1, 0));
        assert_eq!(move_cursor(center, KeyCode::Right), coord(1, 2));
    }

    #[test]
    fn test_edges_clamp() {
        assert_eq!(move_cursor(coord(0, 0), KeyCode::Up), coord(0, 0));
        assert_eq!(move_cursor(coord(0, 0), KeyCode::Left), coord(0, 0));
        assert_eq!(move_cursor(coord(2, 2), KeyCode::Down), coord(2, 2));
        assert_eq!(move_cursor(coord(2, 2), KeyCode::Right), coord(2, 2));
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(move_cursor(coord(1, 2), KeyCode::Enter), coord(1, 2));
    }

    #[test]
    fn test_digits() {
        assert_eq!(digit_to_coord('1'), Some(coord(0, 0)));
        assert_eq!(digit_to_coord('5'), Some(coord(1, 1)));
        assert_eq!(digit_to_coord('9'), Some(coord(2, 2)));
        assert_eq!(digit_to_coord('0'), None);
        assert_eq!(digit_to_coord('a'), None);
    }
}
