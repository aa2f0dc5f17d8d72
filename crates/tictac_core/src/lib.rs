//! Tic-tac-toe game logic against a greedy computer opponent.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid of [`Cell`]s, addressed by validated [`Coord`]s
//! - **Player**: identity plus the [`Marker`] it places
//! - **Rules**: win/draw detection over the 8 [`Line`]s
//! - **Strategy**: the computer's win, then block, then random heuristic
//! - **Session**: owns one game and runs a human move plus the computer reply
//!
//! # Example
//!
//! ```
//! use tictac_core::{Marker, Outcome, Session};
//!
//! let mut session = Session::new(Marker::O, Some(42));
//! let turn = session.play_at(1, 1)?;
//! assert_eq!(turn.outcome, Outcome::InProgress);
//! assert!(turn.computer.is_some());
//! # Ok::<(), tictac_core::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod cell;
mod coord;
mod error;
mod line;
mod outcome;
mod player;
pub mod rules;
mod session;
mod strategy;

pub use board::Board;
pub use cell::{Cell, Marker};
pub use coord::{Coord, Index, SIZE};
pub use error::GameError;
pub use line::Line;
pub use outcome::Outcome;
pub use player::{Identity, Player};
pub use rules::{check_winner, is_draw, winning_line};
pub use session::{Session, Turn};
pub use strategy::{ComputerMove, MoveReason, choose_move, computer_turn};
