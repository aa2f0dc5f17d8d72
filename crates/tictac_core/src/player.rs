//! Player identity and marker assignment.

use crate::cell::Marker;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Who controls a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Identity {
    /// Moves come from the presentation adapter.
    Human,
    /// Moves come from the greedy heuristic.
    Computer,
}

/// A participant in the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    identity: Identity,
    marker: Marker,
    /// Moves made this game. Informational only.
    moves: u32,
}

impl Player {
    /// Creates a player with a zeroed move counter.
    #[instrument]
    pub fn new(identity: Identity, marker: Marker) -> Self {
        Self {
            identity,
            marker,
            moves: 0,
        }
    }

    /// Human player using `marker`.
    pub fn human(marker: Marker) -> Self {
        Self::new(Identity::Human, marker)
    }

    /// Computer player using `marker`.
    pub fn computer(marker: Marker) -> Self {
        Self::new(Identity::Computer, marker)
    }

    /// Returns the identity.
    pub fn identity(&self) -> Identity {
        self.identity
    }

    /// Returns the marker.
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Returns the move counter.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub(crate) fn record_move(&mut self) {
        self.moves += 1;
    }

    pub(crate) fn reset_moves(&mut self) {
        self.moves = 0;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} has markers of the type: {} with a total counter of: {}",
            self.identity, self.marker, self.moves
        )
    }
}
