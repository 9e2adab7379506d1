//! Draw detection.

use crate::board::Board;
use tracing::instrument;

/// Checks if every square on the board is occupied.
///
/// A full board after a non-winning move is a draw.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_full(board: &Board) -> bool {
    board.open_squares().next().is_none()
}
