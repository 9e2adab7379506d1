//! Every recorded move is still on the board, held by the player who made it.

use super::Invariant;
use crate::session::Session;

/// Invariant: each history entry's square is held by that entry's player.
///
/// Squares are never cleared or reassigned within a round, so a mismatch
/// means the board was written behind the session's back.
pub struct HistoryMatchesBoard;

impl Invariant<Session> for HistoryMatchesBoard {
    fn holds(session: &Session) -> bool {
        let board = session.board();
        session
            .history()
            .iter()
            .all(|mv| board.holder(mv.square) == Ok(Some(mv.player)))
    }

    fn description() -> &'static str {
        "Every move in the history is held on the board by its player"
    }
}
