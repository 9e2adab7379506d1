//! Localized win detection.
//!
//! After a move only the lines through the moved-to square can have changed,
//! so the scan walks outward from that square along each of the four axes
//! and stops after `W - 1` steps, at the board edge, or at the first square
//! not held by the mover.

use crate::board::Board;
use crate::player::PlayerId;
use crate::square::Coord;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// A line direction through a square.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum Axis {
    /// Along a row.
    Horizontal,
    /// Along a column.
    Vertical,
    /// Top-left to bottom-right (`\`).
    Diagonal,
    /// Top-right to bottom-left (`/`).
    AntiDiagonal,
}

impl Axis {
    /// Unit step `(d_row, d_col)` in one direction; the opposite direction is its negation.
    pub fn step(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::Diagonal => (1, 1),
            Axis::AntiDiagonal => (1, -1),
        }
    }
}

/// Counts consecutive squares held by `player` walking from `origin` (exclusive)
/// by `(d_row, d_col)`, giving up after `limit` squares.
fn count_direction(
    board: &Board,
    origin: Coord,
    player: PlayerId,
    (d_row, d_col): (isize, isize),
    limit: usize,
) -> usize {
    let size = board.size();
    let mut count = 0;
    let mut at = origin;
    while count < limit {
        match at.offset(d_row, d_col, size) {
            Some(next) if board.square(next).is_held_by(player) => {
                count += 1;
                at = next;
            }
            _ => break,
        }
    }
    count
}

/// Length of the run through `origin` along `axis`: the square itself plus the
/// held squares either side, each side capped at `W - 1`.
pub fn run_length(board: &Board, origin: Coord, player: PlayerId, axis: Axis) -> usize {
    let limit = board.win_length() - 1;
    let (d_row, d_col) = axis.step();
    1 + count_direction(board, origin, player, (d_row, d_col), limit)
        + count_direction(board, origin, player, (-d_row, -d_col), limit)
}

/// True if any axis through `origin` has a run of at least `W` for `player`.
#[instrument(skip(board), fields(win_length = board.win_length()))]
pub fn is_winning_move(board: &Board, origin: Coord, player: PlayerId) -> bool {
    let win_length = board.win_length();
    let winning_axis = Axis::iter().find(|&axis| run_length(board, origin, player, axis) >= win_length);
    if let Some(axis) = winning_axis {
        debug!(%axis, "Winning line found");
        true
    } else {
        false
    }
}
