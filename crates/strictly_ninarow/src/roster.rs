//! Round-robin turn order and score aggregation.

use crate::error::GameError;
use crate::marker::Marker;
use crate::player::{Player, PlayerId};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// One line of the end-of-session tally.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct Standing {
    /// The player's marker.
    marker: Marker,
    /// Rounds won.
    wins: u32,
}

/// Ordered, rotating collection of players.
///
/// Rotation is an index cursor over insertion order: the player at the cursor
/// moves next, then the cursor advances and wraps. This is the same as taking
/// the front player of a queue and requeueing it at the back.
#[derive(Debug, Clone, Default)]
pub struct PlayerRoster {
    players: Vec<Player>,
    cursor: usize,
}

impl PlayerRoster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a roster from marker texts, in order.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyMarker`] on the first blank marker.
    #[instrument(skip(symbols))]
    pub fn from_symbols<I, S>(symbols: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut roster = Self::new();
        for symbol in symbols {
            roster.add_player(symbol)?;
        }
        Ok(roster)
    }

    /// Appends a new player at the back of the turn order.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyMarker`] if the marker text is blank.
    #[instrument(skip(self, symbol))]
    pub fn add_player(&mut self, symbol: impl Into<String>) -> Result<PlayerId, GameError> {
        let player = Player::with_symbol(symbol)?;
        let id = player.id();
        // Insert just before the cursor so the newcomer is last in the current rotation.
        let at = self.cursor;
        self.players.insert(at, player);
        self.cursor = (at + 1) % self.players.len();
        info!(%id, roster_size = self.players.len(), "Added player");
        Ok(id)
    }

    /// Returns the player whose turn it is and rotates them to the back.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyRoster`] if no players are registered.
    #[instrument(skip(self))]
    pub fn next_player(&mut self) -> Result<&Player, GameError> {
        if self.players.is_empty() {
            return Err(GameError::EmptyRoster);
        }
        let at = self.cursor;
        self.cursor = (at + 1) % self.players.len();
        let player = &self.players[at];
        debug!(player = %player.id(), marker = %player.marker(), "Next player");
        Ok(player)
    }

    /// Looks a player up by id.
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    /// Records a win for the given player and returns their new total.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnknownPlayer`] if the id is not on this roster.
    #[instrument(skip(self))]
    pub fn record_win(&mut self, id: PlayerId) -> Result<u32, GameError> {
        let player = self
            .players
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or(GameError::UnknownPlayer(id))?;
        player.record_win();
        Ok(player.wins())
    }

    /// Number of registered players.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// True if no players are registered.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Players in current turn order, starting with whoever moves next.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        let (front, back) = self.players.split_at(self.cursor);
        back.iter().chain(front.iter())
    }

    /// Each player's marker and wins, in current turn order.
    #[instrument(skip(self))]
    pub fn final_standings(&self) -> Vec<Standing> {
        self.iter()
            .map(|p| Standing::new(p.marker().clone(), p.wins()))
            .collect()
    }
}
