//! Occupied squares and recorded moves are in one-to-one correspondence.

use super::Invariant;
use crate::session::Session;

/// Invariant: the number of occupied squares equals the history length.
pub struct OccupancyMatchesHistory;

impl Invariant<Session> for OccupancyMatchesHistory {
    fn holds(session: &Session) -> bool {
        let board = session.board();
        let occupied = board.last_square_number() - board.open_squares().count();
        occupied == session.history().len()
    }

    fn description() -> &'static str {
        "Occupied square count matches move history length"
    }
}
