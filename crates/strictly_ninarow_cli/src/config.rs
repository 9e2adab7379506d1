//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_ninarow::{BoardRules, GameError, PlayerRoster};
use tracing::{debug, info, instrument};

/// Board geometry and player markers for a session.
///
/// Every field has a default, so an empty file is a classic two-player
/// 3×3 game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the board.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Squares in a row needed to win.
    #[serde(default = "default_win_length")]
    win_length: usize,

    /// Player markers, in turn order.
    #[serde(default = "default_markers")]
    markers: Vec<String>,
}

fn default_board_size() -> usize {
    3
}

fn default_win_length() -> usize {
    3
}

fn default_markers() -> Vec<String> {
    vec!["O".to_string(), "X".to_string()]
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            win_length: default_win_length(),
            markers: default_markers(),
        }
    }
}

impl GameConfig {
    /// Creates a configuration from explicit values.
    pub fn new(board_size: usize, win_length: usize, markers: Vec<String>) -> Self {
        Self {
            board_size,
            win_length,
            markers,
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            board_size = config.board_size,
            win_length = config.win_length,
            players = config.markers.len(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Replaces any field given on the command line.
    ///
    /// An empty `markers` list keeps the configured markers.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        board_size: Option<usize>,
        win_length: Option<usize>,
        markers: Vec<String>,
    ) -> Self {
        if let Some(size) = board_size {
            self.board_size = size;
        }
        if let Some(win) = win_length {
            self.win_length = win;
        }
        if !markers.is_empty() {
            self.markers = markers;
        }
        self
    }

    /// Validated board rules.
    pub fn rules(&self) -> Result<BoardRules, GameError> {
        BoardRules::new(self.board_size, self.win_length)
    }

    /// A fresh roster with one player per marker.
    pub fn roster(&self) -> Result<PlayerRoster, GameError> {
        PlayerRoster::from_symbols(self.markers.iter().cloned())
    }

    /// Serializes the configuration back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
