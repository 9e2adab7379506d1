//! Turn sequencing: one board, one roster, rounds played back to back.
//!
//! A round moves through `AwaitingMove(player)` until a move either completes
//! a line (`Won`) or fills the board (`Draw`). The roster outlives rounds, so
//! scores accumulate and turn rotation carries on from wherever it stopped.

use crate::action::{Move, TurnState};
use crate::board::{Board, BoardRules};
use crate::contracts::{Contract, MoveContract};
use crate::error::{GameError, MoveError};
use crate::player::Player;
use crate::roster::{PlayerRoster, Standing};
use tracing::{debug, info, instrument};

/// A series of rounds between the players of one roster.
#[derive(Debug, Clone)]
pub struct Session {
    pub(crate) rules: BoardRules,
    pub(crate) roster: PlayerRoster,
    pub(crate) board: Board,
    pub(crate) state: TurnState,
    pub(crate) history: Vec<Move>,
    pub(crate) rounds_completed: u32,
}

impl Session {
    /// Starts the first round on a fresh board.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyRoster`] if the roster has no players.
    #[instrument(skip(roster), fields(players = roster.len()))]
    pub fn new(rules: BoardRules, mut roster: PlayerRoster) -> Result<Self, GameError> {
        let first = roster.next_player()?.id();
        info!(%first, "Session started");
        Ok(Self {
            rules,
            roster,
            board: Board::with_rules(rules),
            state: TurnState::AwaitingMove(first),
            history: Vec::new(),
            rounds_completed: 0,
        })
    }

    /// Current turn state.
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// The board of the current round.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The roster, with live win counts.
    pub fn roster(&self) -> &PlayerRoster {
        &self.roster
    }

    /// Geometry shared by every round.
    pub fn rules(&self) -> BoardRules {
        self.rules
    }

    /// Moves made in the current round, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Rounds that have ended in a win or draw.
    pub fn rounds_completed(&self) -> u32 {
        self.rounds_completed
    }

    /// The player to move, while the round is in progress.
    pub fn current_player(&self) -> Option<&Player> {
        self.state.to_move().and_then(|id| self.roster.get(id))
    }

    /// The round's winner, once won.
    pub fn winner(&self) -> Option<&Player> {
        match self.state {
            TurnState::Won(id) => self.roster.get(id),
            _ => None,
        }
    }

    /// Takes `square` for the current player and advances the round.
    ///
    /// On a win the winner's score is recorded. Otherwise, if the board is
    /// full the round is drawn, else the roster hands the turn on.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the round already ended.
    /// - [`MoveError::OutOfRange`] if `square` is not on the board.
    /// - [`MoveError::SquareOccupied`] if `square` is taken.
    ///
    /// A rejected move leaves the session unchanged.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn play(&mut self, square: usize) -> Result<TurnState, MoveError> {
        MoveContract::pre(self, &square)?;

        let id = self
            .state
            .to_move()
            .ok_or(MoveError::GameOver)?;
        let player = self.roster.get(id).ok_or(GameError::UnknownPlayer(id))?;

        self.board.place(square, player)?;
        self.history.push(Move::new(id, square));
        let won = self.board.is_winning_move(square, player)?;

        self.state = if won {
            let wins = self.roster.record_win(id)?;
            self.rounds_completed += 1;
            info!(winner = %id, wins, "Round won");
            TurnState::Won(id)
        } else if self.board.is_full() {
            self.rounds_completed += 1;
            info!("Round drawn");
            TurnState::Draw
        } else {
            let next = self.roster.next_player()?.id();
            debug!(%next, "Turn passes");
            TurnState::AwaitingMove(next)
        };

        #[cfg(debug_assertions)]
        MoveContract::post(self)?;

        Ok(self.state)
    }

    /// Clears the board for another round with the same rules and roster.
    ///
    /// The roster picks who moves first, continuing its rotation. Calling
    /// this mid-round abandons that round without scoring it.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyRoster`] if the roster has no players.
    #[instrument(skip(self))]
    pub fn new_round(&mut self) -> Result<TurnState, GameError> {
        let first = self.roster.next_player()?.id();
        self.board = Board::with_rules(self.rules);
        self.history.clear();
        self.state = TurnState::AwaitingMove(first);
        info!(%first, round = self.rounds_completed + 1, "New round");
        Ok(self.state)
    }

    /// Each player's marker and wins, in current roster order.
    pub fn final_standings(&self) -> Vec<Standing> {
        self.roster.final_standings()
    }

    /// Ends the session, handing back the roster with its scores.
    pub fn into_roster(self) -> PlayerRoster {
        self.roster
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic() -> Session {
        let roster = PlayerRoster::from_symbols(["X", "O"]).unwrap();
        Session::new(BoardRules::CLASSIC, roster).unwrap()
    }

    fn marker_of(session: &Session, state: TurnState) -> String {
        let id = match state {
            TurnState::AwaitingMove(id) | TurnState::Won(id) => id,
            TurnState::Draw => panic!("draw has no player"),
        };
        session.roster().get(id).unwrap().marker().to_string()
    }

    #[test]
    fn test_empty_roster_cannot_start() {
        let result = Session::new(BoardRules::CLASSIC, PlayerRoster::new());
        assert_eq!(result.err(), Some(GameError::EmptyRoster));
    }

    #[test]
    fn test_first_player_is_roster_front() {
        let session = classic();
        assert_eq!(marker_of(&session, session.state()), "X");
        assert_eq!(session.current_player().unwrap().marker().as_str(), "X");
    }

    #[test]
    fn test_turns_alternate() {
        let mut session = classic();
        let state = session.play(5).unwrap();
        assert_eq!(marker_of(&session, state), "O");
        let state = session.play(1).unwrap();
        assert_eq!(marker_of(&session, state), "X");
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut session = classic();
        session.play(5).unwrap();
        let before = session.state();
        assert_eq!(session.play(5), Err(MoveError::SquareOccupied(5)));
        assert_eq!(session.play(42), Err(MoveError::OutOfRange { square: 42, last: 9 }));
        assert_eq!(session.state(), before);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_win_records_score() {
        let mut session = classic();
        // X: 1 5 9, O: 2 3
        for square in [1, 2, 5, 3] {
            session.play(square).unwrap();
        }
        let state = session.play(9).unwrap();
        assert!(matches!(state, TurnState::Won(_)));
        assert_eq!(session.winner().unwrap().marker().as_str(), "X");
        assert_eq!(session.winner().unwrap().wins(), 1);
        assert_eq!(session.rounds_completed(), 1);
        assert_eq!(session.play(4), Err(MoveError::GameOver));
    }

    #[test]
    fn test_draw() {
        let mut session = classic();
        // X O X / X O O / O X X
        for square in [1, 2, 3, 5, 4, 6, 8, 7, 9] {
            session.play(square).unwrap();
        }
        assert_eq!(session.state(), TurnState::Draw);
        assert!(session.winner().is_none());
        assert!(session.final_standings().iter().all(|s| *s.wins() == 0));
    }

    #[test]
    fn test_new_round_keeps_scores_and_rotation() {
        let mut session = classic();
        for square in [1, 4, 2, 5, 3] {
            session.play(square).unwrap();
        }
        // X won on the fifth move; O was already queued after X's move.
        let state = session.new_round().unwrap();
        assert_eq!(marker_of(&session, state), "O");
        assert!(session.history().is_empty());
        assert!(!session.board().is_full());
        assert!(session.board().open_squares().eq(1..=9));

        let standings = session.final_standings();
        let x = standings.iter().find(|s| s.marker().as_str() == "X").unwrap();
        assert_eq!(*x.wins(), 1);
    }
}
