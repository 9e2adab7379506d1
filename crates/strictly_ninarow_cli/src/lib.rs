//! Console front-end for the `strictly_ninarow` engine.
//!
//! Everything a player sees lives here: prompts, input validation, board
//! drawing, the play-again loop and the closing tally. The engine is only
//! ever called with squares already checked against the board.
//!
//! # Architecture
//!
//! - **cli**: `clap` commands and flags
//! - **config**: TOML game settings with command-line overrides
//! - **console**: token input, reprompts and message text
//! - **render**: board and standings as text
//! - **app**: the session loop

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod console;
mod render;

pub use app::run;
pub use cli::{Cli, Command, GameArgs};
pub use config::{ConfigError, GameConfig};
pub use console::Console;
pub use render::{board as render_board, standings as render_standings};
