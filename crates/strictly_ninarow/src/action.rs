//! Moves and turn states.

use crate::player::PlayerId;
use derive_more::Display;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A player taking a square.
///
/// Recorded in the session history so invariants can be checked against the
/// board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, new)]
#[display("{player} -> {square}")]
pub struct Move {
    /// The player making the move.
    pub player: PlayerId,
    /// The square taken.
    pub square: usize,
}

/// Where a round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnState {
    /// Waiting for this player to move.
    AwaitingMove(PlayerId),
    /// This player completed a line. Terminal.
    Won(PlayerId),
    /// The board filled with no line. Terminal.
    Draw,
}

impl TurnState {
    /// True for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TurnState::AwaitingMove(_))
    }

    /// The player to move, while the round is in progress.
    pub fn to_move(&self) -> Option<PlayerId> {
        match self {
            TurnState::AwaitingMove(player) => Some(*player),
            _ => None,
        }
    }

    /// The round's outcome once terminal.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            TurnState::AwaitingMove(_) => None,
            TurnState::Won(player) => Some(Outcome::Winner(*player)),
            TurnState::Draw => Some(Outcome::Draw),
        }
    }
}

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the round.
    Winner(PlayerId),
    /// Round ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the round was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}
