//! Display symbol identifying a player's moves.

use crate::error::GameError;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player's display symbol (for example `X` or `O`).
///
/// Never blank. Two markers with equal text compare equal, but the board
/// tells players apart by [`PlayerId`](crate::PlayerId), not by marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Marker(String);

impl Marker {
    /// Creates a marker from its symbol.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyMarker`] if the symbol is empty or only whitespace.
    #[instrument(skip(symbol))]
    pub fn new(symbol: impl Into<String>) -> Result<Self, GameError> {
        let symbol = symbol.into();
        if symbol.trim().is_empty() {
            return Err(GameError::EmptyMarker);
        }
        Ok(Self(symbol))
    }

    /// Returns the symbol text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Width of the symbol in characters.
    pub fn width(&self) -> usize {
        self.0.chars().count()
    }
}

impl AsRef<str> for Marker {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Marker {
    type Error = GameError;

    fn try_from(symbol: String) -> Result<Self, Self::Error> {
        Self::new(symbol)
    }
}

impl From<Marker> for String {
    fn from(marker: Marker) -> Self {
        marker.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_keeps_symbol() {
        let marker = Marker::new("X").unwrap();
        assert_eq!(marker.as_str(), "X");
        assert_eq!(marker.to_string(), "X");
    }

    #[test]
    fn test_empty_marker_rejected() {
        assert_eq!(Marker::new(""), Err(GameError::EmptyMarker));
    }

    #[test]
    fn test_blank_marker_rejected() {
        assert_eq!(Marker::new("   "), Err(GameError::EmptyMarker));
    }

    #[test]
    fn test_width_counts_chars() {
        assert_eq!(Marker::new("Ω").unwrap().width(), 1);
        assert_eq!(Marker::new("ab").unwrap().width(), 2);
    }
}
