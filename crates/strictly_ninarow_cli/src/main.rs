//! `ninarow` - play N-in-a-row on the console.

use anyhow::Result;
use clap::Parser;
use std::io;
use strictly_ninarow_cli::{Cli, Command, Console};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the game on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    debug!(?cli, "Parsed command line");

    match cli.command.unwrap_or_default() {
        Command::Play(args) => {
            let config = args.resolve()?;
            info!(?config, "Starting console game");
            let stdin = io::stdin();
            let mut console = Console::new(stdin.lock(), io::stdout());
            strictly_ninarow_cli::run(&config, &mut console)?;
        }
        Command::ShowConfig(args) => {
            let config = args.resolve()?;
            print!("{}", config.to_toml()?);
        }
    }

    Ok(())
}
