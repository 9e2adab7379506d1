//! Consistency checks between a session's board and its move history.
//!
//! `Session::play` runs [`SessionInvariants`] after each accepted move in
//! debug builds. Each check is a zero-sized type so sets of them compose as
//! tuples.

/// A property of `S` that holds between moves.
pub trait Invariant<S> {
    /// True if `state` satisfies the property.
    fn holds(state: &S) -> bool;

    /// One-line statement of the property, used in violation reports.
    fn description() -> &'static str;
}

/// A failed [`Invariant`], named by its description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// What was expected to hold.
    pub description: String,
}

impl InvariantViolation {
    /// Wraps a description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    fn of<S, I: Invariant<S>>(state: &S) -> Option<Self> {
        (!I::holds(state)).then(|| Self::new(I::description()))
    }
}

/// Several invariants checked as one. Every failure is reported, not just
/// the first.
pub trait InvariantSet<S> {
    /// `Ok` if all hold, otherwise the violations in declaration order.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, A, B> InvariantSet<S> for (A, B)
where
    A: Invariant<S>,
    B: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [InvariantViolation::of::<S, A>(state), InvariantViolation::of::<S, B>(state)]
            .into_iter()
            .flatten()
            .collect();
        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}

pub mod history_matches_board;
pub mod occupancy_matches_history;

pub use history_matches_board::HistoryMatchesBoard;
pub use occupancy_matches_history::OccupancyMatchesHistory;

/// All session invariants as a composable set.
pub type SessionInvariants = (HistoryMatchesBoard, OccupancyMatchesHistory);
