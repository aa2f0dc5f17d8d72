//! A single human-versus-computer game.

use crate::board::Board;
use crate::cell::Marker;
use crate::coord::Coord;
use crate::error::GameError;
use crate::outcome::Outcome;
use crate::player::Player;
use crate::rules::check_winner;
use crate::strategy::{ComputerMove, computer_turn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, instrument, warn};

/// What happened during one call to [`Session::play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    /// Cell the human took.
    pub human: Coord,
    /// Cell the computer took, if the game was still running after the human move.
    pub computer: Option<ComputerMove>,
    /// Outcome after both moves.
    pub outcome: Outcome,
}

/// Owns the board, both players and the random source for one game.
///
/// The human always moves first. Each [`play`](Session::play) call applies the
/// human move, then the computer's reply if nobody has won yet.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    human: Player,
    computer: Player,
    rng: StdRng,
}

impl Session {
    /// Creates a session. `seed` makes the computer's random fallback repeatable.
    #[instrument]
    pub fn new(human_marker: Marker, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(human_marker, rng)
    }

    /// Creates a session with an explicit random source.
    #[instrument(skip(rng))]
    pub fn with_rng(human_marker: Marker, rng: StdRng) -> Self {
        let human = Player::human(human_marker);
        let computer = Player::computer(human_marker.opponent());
        info!(%human, %computer, "Creating game session");
        Self {
            board: Board::new(),
            human,
            computer,
            rng,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the human player.
    pub fn human(&self) -> &Player {
        &self.human
    }

    /// Returns the computer player.
    pub fn computer(&self) -> &Player {
        &self.computer
    }

    /// Evaluates the current board.
    pub fn outcome(&self) -> Outcome {
        check_winner(&self.board, &self.human, &self.computer)
    }

    /// Plays the human move at `(row, col)`.
    #[instrument(skip(self))]
    pub fn play_at(&mut self, row: usize, col: usize) -> Result<Turn, GameError> {
        self.play(Coord::new(row, col)?)
    }

    /// Plays the human move at `coord`, followed by the computer's reply.
    ///
    /// # Errors
    ///
    /// Returns `GameError::GameOver` once the outcome is terminal and
    /// `GameError::CellOccupied` if `coord` already holds a marker. The board
    /// is unchanged in both cases.
    #[instrument(skip(self))]
    pub fn play(&mut self, coord: Coord) -> Result<Turn, GameError> {
        let outcome = self.outcome();
        if outcome.is_terminal() {
            warn!(%outcome, "Move attempted after game ended");
            return Err(GameError::GameOver(outcome));
        }
        if !self.board.is_empty(coord) {
            warn!("Move attempted on occupied cell");
            return Err(GameError::CellOccupied(coord));
        }

        self.board.set(coord, self.human.marker().into());
        self.human.record_move();
        debug!(moves = self.human.moves(), "Human move applied");

        let outcome = self.outcome();
        if outcome.is_terminal() {
            info!(%outcome, "Game over after human move");
            return Ok(Turn {
                human: coord,
                computer: None,
                outcome,
            });
        }

        let computer = computer_turn(&mut self.board, &self.computer, &self.human, &mut self.rng);
        if let Some(chosen) = computer {
            self.computer.record_move();
            info!(coord = %chosen.coord, reason = %chosen.reason, "Computer moved");
        }

        let outcome = self.outcome();
        if outcome.is_terminal() {
            info!(%outcome, "Game over after computer move");
        }
        Ok(Turn {
            human: coord,
            computer,
            outcome,
        })
    }

    /// Clears the board and move counters for a new game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting session");
        self.board.clear();
        self.human.reset_moves();
        self.computer.reset_moves();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;

    #[test]
    fn test_new_session() {
        let session = Session::new(Marker::O, Some(1));
        assert_eq!(session.human().marker(), Marker::O);
        assert_eq!(session.computer().marker(), Marker::X);
        assert_eq!(session.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_play_applies_both_moves() {
        let mut session = Session::new(Marker::O, Some(1));
        let turn = session.play_at(1, 1).expect("legal move");
        assert_eq!(turn.human, Coord::at(1, 1));
        let reply = turn.computer.expect("computer replies");
        assert_ne!(reply.coord, turn.human);
        assert_eq!(session.board().get(reply.coord), Cell::Occupied(Marker::X));
        assert_eq!(session.board().empty_cells().len(), 7);
        assert_eq!(session.human().moves(), 1);
        assert_eq!(session.computer().moves(), 1);
    }

    #[test]
    fn test_play_rejects_occupied_cell() {
        let mut session = Session::new(Marker::O, Some(1));
        session.play_at(0, 0).expect("legal move");
        let before = session.board().clone();
        assert_eq!(
            session.play_at(0, 0),
            Err(GameError::CellOccupied(Coord::at(0, 0)))
        );
        assert_eq!(session.board(), &before);
    }

    #[test]
    fn test_play_rejects_off_board() {
        let mut session = Session::new(Marker::O, Some(1));
        assert_eq!(
            session.play_at(3, 1),
            Err(GameError::InvalidCoordinate { row: 3, col: 1 })
        );
    }

    #[test]
    fn test_reset() {
        let mut session = Session::new(Marker::X, Some(9));
        session.play_at(2, 2).expect("legal move");
        session.reset();
        assert_eq!(session.board(), &Board::new());
        assert_eq!(session.human().moves(), 0);
        assert_eq!(session.computer().moves(), 0);
        assert_eq!(session.human().marker(), Marker::X);
    }
}
