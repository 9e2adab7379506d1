//! Error types for the N-in-a-row engine.

use crate::player::PlayerId;
use derive_more::{Display, Error};

/// Errors raised by the board, roster and marker constructors.
///
/// These signal caller error. The engine never retries or recovers from
/// them; a front-end is expected to validate input before calling in.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Board size was zero, or the win length was zero or larger than the board.
    #[display(
        "Invalid board configuration: size {size} with win length {win_length} \
         (need size >= 1 and 1 <= win length <= size)"
    )]
    InvalidConfiguration {
        /// Requested board size.
        size: usize,
        /// Requested win length.
        win_length: usize,
    },

    /// Square number outside `1..=last`.
    #[display("Square {square} is out of range (1-{last})")]
    OutOfRange {
        /// Offending square number.
        square: usize,
        /// Last valid square number on the board.
        last: usize,
    },

    /// Marker text was empty or blank.
    #[display("Player marker must not be empty")]
    EmptyMarker,

    /// A turn was requested from a roster with no players.
    #[display("Player roster is empty")]
    EmptyRoster,

    /// A player id that the roster never issued.
    #[display("Unknown player {_0}")]
    UnknownPlayer(#[error(not(source))] PlayerId),
}

/// Error that can occur when validating or applying a move in a session.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The round has already been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// Square number outside the board.
    #[display("Square {square} is out of range (1-{last})")]
    OutOfRange {
        /// Offending square number.
        square: usize,
        /// Last valid square number on the board.
        last: usize,
    },

    /// The square is already taken.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(#[error(not(source))] usize),

    /// A session invariant failed after a move (postcondition failure).
    #[display("Invariant violation: {_0}")]
    InvariantViolation(#[error(not(source))] String),

    /// The roster could not supply the next player.
    #[display("{_0}")]
    Roster(GameError),
}

impl From<GameError> for MoveError {
    fn from(err: GameError) -> Self {
        match err {
            GameError::OutOfRange { square, last } => MoveError::OutOfRange { square, last },
            other => MoveError::Roster(other),
        }
    }
}
