//! Greedy one-ply move selection for the computer player.
//!
//! The computer takes a winning cell if it has one, otherwise blocks the
//! human's winning cell, otherwise picks a random empty cell. It looks exactly
//! one move ahead, so it cannot see forks and can be beaten.

use crate::board::Board;
use crate::cell::Marker;
use crate::coord::Coord;
use crate::line::Line;
use crate::player::Player;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Why the computer picked its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum MoveReason {
    /// Completes a line for the computer.
    Win,
    /// Occupies the last empty cell of the human's 2-of-3 line.
    Block,
    /// Uniform pick among the empty cells.
    Random,
}

/// A cell chosen by the computer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct ComputerMove {
    /// Where the marker goes.
    pub coord: Coord,
    /// Which rule selected it.
    pub reason: MoveReason,
}

/// First line, in scan order, that `marker` can complete this move.
fn completing_move(board: &Board, marker: Marker) -> Option<(Line, Coord)> {
    Line::ALL
        .iter()
        .find_map(|&line| line.completing_cell(board, marker).map(|coord| (line, coord)))
}

/// Picks the computer's next cell without touching the board.
///
/// Returns `None` when the board is full.
#[instrument(skip_all, fields(computer = %computer.marker(), human = %human.marker()))]
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    computer: &Player,
    human: &Player,
    rng: &mut R,
) -> Option<ComputerMove> {
    if let Some((line, coord)) = completing_move(board, computer.marker()) {
        debug!(?line, %coord, "Winning move available");
        return Some(ComputerMove::new(coord, MoveReason::Win));
    }

    if let Some((line, coord)) = completing_move(board, human.marker()) {
        debug!(?line, %coord, "Blocking human line");
        return Some(ComputerMove::new(coord, MoveReason::Block));
    }

    let empty = board.empty_cells();
    if empty.is_empty() {
        debug!("Board full, no move");
        return None;
    }
    let coord = empty[rng.gen_range(0..empty.len())];
    debug!(%coord, candidates = empty.len(), "Random move");
    Some(ComputerMove::new(coord, MoveReason::Random))
}

/// Chooses a cell for the computer and places its marker there.
///
/// A full board is left untouched and yields `None`.
#[instrument(skip_all, fields(computer = %computer.marker()))]
pub fn computer_turn<R: Rng + ?Sized>(
    board: &mut Board,
    computer: &Player,
    human: &Player,
    rng: &mut R,
) -> Option<ComputerMove> {
    let chosen = choose_move(board, computer, human, rng)?;
    board.set(chosen.coord, computer.marker().into());
    Some(chosen)
}
