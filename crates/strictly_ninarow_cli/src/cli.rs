//! Command-line interface for the console game.

use crate::config::{ConfigError, GameConfig};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::instrument;

/// N-in-a-row - tic-tac-toe on any board size, for any number of players
#[derive(Parser, Debug)]
#[command(name = "ninarow")]
#[command(about = "Console N-in-a-row game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play rounds on the console until someone declines a rematch
    Play(GameArgs),

    /// Print the effective configuration as TOML
    ShowConfig(GameArgs),
}

impl Default for Command {
    fn default() -> Self {
        Command::Play(GameArgs::default())
    }
}

/// Settings shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct GameArgs {
    /// Path to a TOML game config
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Board size (N for an N x N board)
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Squares in a row needed to win
    #[arg(short, long)]
    pub win_length: Option<usize>,

    /// Player marker, in turn order (repeat for each player)
    #[arg(short, long = "marker")]
    pub markers: Vec<String>,
}

impl GameArgs {
    /// Loads the config file, if any, and applies command-line overrides.
    #[instrument(skip(self), fields(config = ?self.config))]
    pub fn resolve(&self) -> Result<GameConfig, ConfigError> {
        let base = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };
        Ok(base.with_overrides(self.size, self.win_length, self.markers.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_play() {
        let cli = Cli::try_parse_from(["ninarow"]).unwrap();
        assert!(cli.command.is_none());
        assert!(matches!(Command::default(), Command::Play(_)));
    }

    #[test]
    fn test_play_flags() {
        let cli = Cli::try_parse_from([
            "ninarow", "play", "--size", "5", "-w", "4", "-m", "A", "-m", "B", "-m", "C",
        ])
        .unwrap();
        let Some(Command::Play(args)) = cli.command else {
            panic!("expected play");
        };
        let config = args.resolve().unwrap();
        assert_eq!(*config.board_size(), 5);
        assert_eq!(*config.win_length(), 4);
        assert_eq!(config.markers(), &["A", "B", "C"]);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let args = GameArgs {
            config: Some(PathBuf::from("/definitely/not/here.toml")),
            ..GameArgs::default()
        };
        let err = args.resolve().unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
    }
}
