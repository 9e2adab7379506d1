//! Contract-based move validation.
//!
//! Contracts state what must hold before a move is applied (preconditions)
//! and what must still hold afterwards (postconditions).

use crate::error::MoveError;
use crate::invariants::{InvariantSet, SessionInvariants};
use crate::session::Session;
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions on the state after applying the action.
    fn post(state: &S) -> Result<(), MoveError>;
}

/// Precondition: the round has not been won or drawn.
pub struct RoundInProgress;

impl RoundInProgress {
    /// Fails with [`MoveError::GameOver`] once the round is terminal.
    pub fn check(session: &Session) -> Result<(), MoveError> {
        if session.state().is_terminal() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the square number is on the board.
pub struct SquareInRange;

impl SquareInRange {
    /// Fails with [`MoveError::OutOfRange`] outside `1..=N²`.
    pub fn check(square: usize, session: &Session) -> Result<(), MoveError> {
        let board = session.board();
        if board.contains(square) {
            Ok(())
        } else {
            Err(MoveError::OutOfRange {
                square,
                last: board.last_square_number(),
            })
        }
    }
}

/// Precondition: the square is open.
pub struct SquareIsOpen;

impl SquareIsOpen {
    /// Fails with [`MoveError::SquareOccupied`] if the square is taken.
    pub fn check(square: usize, session: &Session) -> Result<(), MoveError> {
        if session.board().is_occupied(square)? {
            Err(MoveError::SquareOccupied(square))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: a move is legal if the round is live and the square is on the board and open.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(session))]
    pub fn check(square: usize, session: &Session) -> Result<(), MoveError> {
        RoundInProgress::check(session)?;
        SquareInRange::check(square, session)?;
        SquareIsOpen::check(square, session)?;
        Ok(())
    }
}

/// Contract for taking a square.
pub struct MoveContract;

impl Contract<Session, usize> for MoveContract {
    fn pre(session: &Session, square: &usize) -> Result<(), MoveError> {
        LegalMove::check(*square, session)
    }

    fn post(session: &Session) -> Result<(), MoveError> {
        SessionInvariants::check_all(session).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
