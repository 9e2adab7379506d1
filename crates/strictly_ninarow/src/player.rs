//! Players and their identities.

use crate::error::GameError;
use crate::marker::Marker;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, instrument};

static NEXT_PLAYER_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a player.
///
/// Every [`Player::new`] call issues a fresh id, so two players sharing a
/// marker are still distinct occupants on the board. Clones of a player keep
/// its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize)]
#[display("#{_0}")]
pub struct PlayerId(u64);

impl PlayerId {
    fn issue() -> Self {
        Self(NEXT_PLAYER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A marker plus a win counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    marker: Marker,
    wins: u32,
}

impl Player {
    /// Creates a player with zero wins.
    #[instrument]
    pub fn new(marker: Marker) -> Self {
        let id = PlayerId::issue();
        debug!(%id, %marker, "Created player");
        Self {
            id,
            marker,
            wins: 0,
        }
    }

    /// Creates a player straight from marker text.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyMarker`] for blank text.
    pub fn with_symbol(symbol: impl Into<String>) -> Result<Self, GameError> {
        Marker::new(symbol).map(Self::new)
    }

    /// Returns the player's identity.
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Returns the player's marker.
    pub fn marker(&self) -> &Marker {
        &self.marker
    }

    /// Returns the number of rounds this player has won.
    pub fn wins(&self) -> u32 {
        self.wins
    }

    /// Records one more win.
    #[instrument(skip(self), fields(player = %self.id, marker = %self.marker))]
    pub fn record_win(&mut self) {
        self.wins += 1;
        debug!(wins = self.wins, "Recorded win");
    }

    /// True if `other` is the same player (same identity), regardless of marker text.
    pub fn is(&self, other: &Player) -> bool {
        self.id == other.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_has_no_wins() {
        let player = Player::with_symbol("X").unwrap();
        assert_eq!(player.wins(), 0);
        assert_eq!(player.marker().as_str(), "X");
    }

    #[test]
    fn test_record_win_increments() {
        let mut player = Player::with_symbol("O").unwrap();
        player.record_win();
        player.record_win();
        assert_eq!(player.wins(), 2);
    }

    #[test]
    fn test_same_marker_distinct_identity() {
        let a = Player::with_symbol("X").unwrap();
        let b = Player::with_symbol("X").unwrap();
        assert_eq!(a.marker(), b.marker());
        assert!(!a.is(&b));
        assert!(a.is(&a.clone()));
    }

    #[test]
    fn test_blank_symbol_rejected() {
        assert_eq!(Player::with_symbol(" "), Err(GameError::EmptyMarker));
    }
}
