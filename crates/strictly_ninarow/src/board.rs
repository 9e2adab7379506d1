//! The N×N board: geometry, occupancy and the read-only snapshot.

use crate::error::GameError;
use crate::player::{Player, PlayerId};
use crate::rules::{self, Axis};
use crate::square::{Coord, Occupant, Square, SquareState};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Validated board geometry: size `N >= 1` and win length `1 <= W <= N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRules")]
pub struct BoardRules {
    size: usize,
    win_length: usize,
}

#[derive(Deserialize)]
struct RawRules {
    size: usize,
    win_length: usize,
}

impl TryFrom<RawRules> for BoardRules {
    type Error = GameError;

    fn try_from(raw: RawRules) -> Result<Self, Self::Error> {
        Self::new(raw.size, raw.win_length)
    }
}

impl BoardRules {
    /// Classic 3×3, three in a row.
    pub const CLASSIC: BoardRules = BoardRules {
        size: 3,
        win_length: 3,
    };

    /// Validates a size and win length.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfiguration`] unless `size >= 1` and
    /// `1 <= win_length <= size`.
    pub fn new(size: usize, win_length: usize) -> Result<Self, GameError> {
        if size < 1 || win_length < 1 || win_length > size {
            return Err(GameError::InvalidConfiguration { size, win_length });
        }
        Ok(Self { size, win_length })
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Squares in a line needed to win.
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Number of squares, `N²`.
    pub fn square_count(&self) -> usize {
        self.size * self.size
    }
}

impl Default for BoardRules {
    fn default() -> Self {
        Self::CLASSIC
    }
}

/// An N×N grid of squares numbered `1..=N²` in row-major order.
///
/// The board owns its squares. Occupied squares remember the occupying
/// player's [`PlayerId`](crate::PlayerId) and marker; occupancy is compared by
/// id, never by marker text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rules: BoardRules,
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfiguration`] for a zero size, or a win
    /// length of zero or larger than the size.
    #[instrument]
    pub fn new(size: usize, win_length: usize) -> Result<Self, GameError> {
        BoardRules::new(size, win_length).map(Self::with_rules)
    }

    /// Creates an empty board from already-validated rules.
    #[instrument]
    pub fn with_rules(rules: BoardRules) -> Self {
        let squares = (1..=rules.square_count()).map(Square::open).collect();
        debug!(size = rules.size(), win_length = rules.win_length(), "Created board");
        Self { rules, squares }
    }

    /// The board's geometry.
    pub fn rules(&self) -> BoardRules {
        self.rules
    }

    /// Side length `N`.
    pub fn size(&self) -> usize {
        self.rules.size()
    }

    /// Win length `W`.
    pub fn win_length(&self) -> usize {
        self.rules.win_length()
    }

    /// Always 1.
    pub fn first_square_number(&self) -> usize {
        1
    }

    /// `N²`.
    pub fn last_square_number(&self) -> usize {
        self.squares.len()
    }

    /// True if `square` names a square on this board.
    pub fn contains(&self, square: usize) -> bool {
        (self.first_square_number()..=self.last_square_number()).contains(&square)
    }

    fn check_range(&self, square: usize) -> Result<(), GameError> {
        if self.contains(square) {
            Ok(())
        } else {
            Err(GameError::OutOfRange {
                square,
                last: self.last_square_number(),
            })
        }
    }

    /// Grid coordinate of a square number.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfRange`] outside `1..=N²`.
    pub fn coord_of(&self, square: usize) -> Result<Coord, GameError> {
        self.check_range(square)?;
        Ok(Coord::from_number(square, self.size()))
    }

    /// Square number at a grid coordinate, or `None` off the board.
    pub fn square_at(&self, coord: Coord) -> Option<usize> {
        (coord.row < self.size() && coord.col < self.size()).then(|| coord.to_number(self.size()))
    }

    pub(crate) fn square(&self, coord: Coord) -> &Square {
        &self.squares[coord.row * self.size() + coord.col]
    }

    /// True if the square has been taken.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfRange`] outside `1..=N²`.
    pub fn is_occupied(&self, square: usize) -> Result<bool, GameError> {
        self.check_range(square)?;
        Ok(self.squares[square - 1].is_occupied())
    }

    /// True if `player` holds the square.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfRange`] outside `1..=N²`.
    pub fn is_held_by(&self, square: usize, player: &Player) -> Result<bool, GameError> {
        self.check_range(square)?;
        Ok(self.squares[square - 1].is_held_by(player.id()))
    }

    /// Id of the player holding the square, if any.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfRange`] outside `1..=N²`.
    pub fn holder(&self, square: usize) -> Result<Option<PlayerId>, GameError> {
        self.check_range(square)?;
        Ok(self.squares[square - 1].occupant.as_ref().map(|o| o.id))
    }

    /// Gives `square` to `player`.
    ///
    /// The square must be open: callers check [`Board::is_occupied`] first.
    /// Placing on a taken square is a caller bug and trips a debug assertion.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfRange`] outside `1..=N²`.
    #[instrument(skip(self, player), fields(player = %player.id(), marker = %player.marker()))]
    pub fn place(&mut self, square: usize, player: &Player) -> Result<(), GameError> {
        self.check_range(square)?;
        let cell = &mut self.squares[square - 1];
        debug_assert!(!cell.is_occupied(), "square {square} is already occupied");
        cell.occupant = Some(Occupant::from(player));
        debug!("Placed marker");
        Ok(())
    }

    /// True once every square is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// True if the run through `square` held by `player` reaches the win length
    /// along any axis.
    ///
    /// Only the `W - 1` squares either side of `square` on each axis are
    /// looked at, so the cost is O(W) rather than a whole-board rescan. The
    /// square itself counts toward the run whether or not it is held yet.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfRange`] outside `1..=N²`.
    pub fn is_winning_move(&self, square: usize, player: &Player) -> Result<bool, GameError> {
        let origin = self.coord_of(square)?;
        Ok(rules::is_winning_move(self, origin, player.id()))
    }

    /// Length of the `player` run through `square` along one axis, capped at
    /// `2W - 1`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfRange`] outside `1..=N²`.
    pub fn run_length(&self, square: usize, player: &Player, axis: Axis) -> Result<usize, GameError> {
        let origin = self.coord_of(square)?;
        Ok(rules::run_length(self, origin, player.id(), axis))
    }

    /// Numbers of the open squares, ascending.
    pub fn open_squares(&self) -> impl Iterator<Item = usize> + '_ {
        self.squares
            .iter()
            .filter(|s| !s.is_occupied())
            .map(|s| s.number)
    }

    /// Read-only view for rendering.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot { board: self }
    }
}

/// Restartable row-major view of a board's square states.
///
/// Each call to [`Snapshot::iter`] or [`Snapshot::rows`] starts from the
/// first square again; nothing is copied up front.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    board: &'a Board,
}

impl<'a> Snapshot<'a> {
    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Last square number, handy for sizing cells.
    pub fn last_square_number(&self) -> usize {
        self.board.last_square_number()
    }

    /// All square states in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = SquareState<'a>> + Clone + 'a {
        let board = self.board;
        board.squares.iter().map(Square::state)
    }

    /// Square states grouped by row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = SquareState<'a>> + Clone + 'a> + 'a {
        let board = self.board;
        board
            .squares
            .chunks(board.size())
            .map(|row| row.iter().map(Square::state))
    }
}
