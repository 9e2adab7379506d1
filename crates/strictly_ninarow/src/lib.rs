//! Size-agnostic N-in-a-row engine.
//!
//! Tic-tac-toe generalized to an N×N board, a configurable win length and any
//! number of players taking turns in round-robin order.
//!
//! # Architecture
//!
//! - **Marker / Player**: a display symbol plus a win counter. Players are
//!   told apart by [`PlayerId`], never by marker text.
//! - **PlayerRoster**: rotating turn order and final standings.
//! - **Board**: the grid, square numbering, and the localized win scan that
//!   only walks `W - 1` squares each way along the four axes through the
//!   last move.
//! - **Session**: binds a board and a roster into rounds of
//!   `AwaitingMove → Won | Draw`.
//!
//! The crate owns no display text; rendering and input are the caller's.
//!
//! # Example
//!
//! ```
//! use strictly_ninarow::{BoardRules, PlayerRoster, Session, TurnState};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let roster = PlayerRoster::from_symbols(["X", "O"])?;
//! let mut session = Session::new(BoardRules::new(3, 3)?, roster)?;
//!
//! for square in [1, 4, 2, 5] {
//!     session.play(square)?;
//! }
//! assert!(matches!(session.play(3)?, TurnState::Won(_)));
//! assert_eq!(session.winner().map(|p| p.marker().as_str()), Some("X"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod error;
mod marker;
mod player;
mod roster;
mod session;
mod square;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::{Move, Outcome, TurnState};
pub use board::{Board, BoardRules, Snapshot};
pub use error::{GameError, MoveError};
pub use marker::Marker;
pub use player::{Player, PlayerId};
pub use roster::{PlayerRoster, Standing};
pub use rules::Axis;
pub use session::Session;
pub use square::{Coord, SquareState};
