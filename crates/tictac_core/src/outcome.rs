//! Game outcome.

use crate::player::Identity;
use serde::{Deserialize, Serialize};

/// Result of evaluating a board. Always derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// Human completed a line.
    #[display("Human wins")]
    HumanWins,
    /// Computer completed a line.
    #[display("Computer wins")]
    ComputerWins,
    /// Board full with no line.
    #[display("Draw")]
    Draw,
    /// Moves remain and nobody has won.
    #[display("In progress")]
    InProgress,
}

impl Outcome {
    /// Returns true for the three end states.
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }

    /// Identity of the winner, if the game was won.
    pub fn winner(self) -> Option<Identity> {
        match self {
            Outcome::HumanWins => Some(Identity::Human),
            Outcome::ComputerWins => Some(Identity::Computer),
            Outcome::Draw | Outcome::InProgress => None,
        }
    }

    /// Win outcome for the given identity.
    pub fn win_for(identity: Identity) -> Self {
        match identity {
            Identity::Human => Outcome::HumanWins,
            Identity::Computer => Outcome::ComputerWins,
        }
    }
}
