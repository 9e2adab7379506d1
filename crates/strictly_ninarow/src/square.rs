//! Squares, coordinates and the read-only square view.

use crate::marker::Marker;
use crate::player::{Player, PlayerId};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Zero-based grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display("({row}, {col})")]
pub struct Coord {
    /// Row, counted from the top.
    pub row: usize,
    /// Column, counted from the left.
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Coordinate of a 1-based square number on a `size`-wide board.
    ///
    /// `row = (number - 1) / size`, `col = (number - 1) % size`.
    /// Callers range-check first; [`Board::coord_of`](crate::Board::coord_of)
    /// is the public form.
    pub(crate) fn from_number(number: usize, size: usize) -> Self {
        debug_assert!(number >= 1 && size >= 1, "square {number} on a {size}-wide board");
        let index = number - 1;
        Self {
            row: index / size,
            col: index % size,
        }
    }

    /// 1-based square number of this coordinate on a `size`-wide board.
    pub fn to_number(self, size: usize) -> usize {
        self.row * size + self.col + 1
    }

    /// Steps by a signed offset, or `None` if that leaves a `size`-wide board.
    pub(crate) fn offset(self, d_row: isize, d_col: isize, size: usize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        (row < size && col < size).then_some(Self { row, col })
    }
}

/// Who holds a square: the player's identity plus their marker for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Occupant {
    pub(crate) id: PlayerId,
    pub(crate) marker: Marker,
}

impl From<&Player> for Occupant {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id(),
            marker: player.marker().clone(),
        }
    }
}

/// One cell of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Square {
    pub(crate) number: usize,
    pub(crate) occupant: Option<Occupant>,
}

impl Square {
    pub(crate) fn open(number: usize) -> Self {
        Self {
            number,
            occupant: None,
        }
    }

    pub(crate) fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    pub(crate) fn is_held_by(&self, id: PlayerId) -> bool {
        self.occupant.as_ref().is_some_and(|o| o.id == id)
    }

    pub(crate) fn state(&self) -> SquareState<'_> {
        match &self.occupant {
            None => SquareState::Open(self.number),
            Some(occupant) => SquareState::Taken(&occupant.marker),
        }
    }
}

/// What a renderer shows for a square: its number while open, otherwise the occupant's marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SquareState<'a> {
    /// Unoccupied square, shown by number.
    #[display("{_0}")]
    Open(usize),
    /// Occupied square, shown by the occupant's marker.
    #[display("{_0}")]
    Taken(&'a Marker),
}

impl SquareState<'_> {
    /// True for occupied squares.
    pub fn is_taken(&self) -> bool {
        matches!(self, SquareState::Taken(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_to_coord_4x4() {
        // Square 6 on a 4x4 board is row 1, column 1.
        assert_eq!(Coord::from_number(6, 4), Coord::new(1, 1));
        assert_eq!(Coord::from_number(1, 4), Coord::new(0, 0));
        assert_eq!(Coord::from_number(16, 4), Coord::new(3, 3));
    }

    #[test]
    fn test_coord_to_number() {
        assert_eq!(Coord::new(2, 0).to_number(3), 7);
    }

    #[test]
    fn test_offset_stops_at_edges() {
        let corner = Coord::new(0, 0);
        assert_eq!(corner.offset(-1, 0, 3), None);
        assert_eq!(corner.offset(0, -1, 3), None);
        assert_eq!(corner.offset(1, 1, 3), Some(Coord::new(1, 1)));
        assert_eq!(Coord::new(2, 2).offset(1, 0, 3), None);
    }

    #[test]
    fn test_square_state_display() {
        let marker = Marker::new("X").unwrap();
        assert_eq!(SquareState::Open(7).to_string(), "7");
        assert_eq!(SquareState::Taken(&marker).to_string(), "X");
    }
}
