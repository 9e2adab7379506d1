//! The console session loop: rounds, rematches and the final tally.

use crate::config::GameConfig;
use crate::console::{self, Console};
use crate::render;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use strictly_ninarow::{Session, Standing, TurnState};
use tracing::{info, instrument};

/// Plays rounds until the players decline a rematch or input runs out.
///
/// Returns the final standings, which have also been printed.
#[instrument(skip(console))]
pub fn run<R: BufRead, W: Write>(config: &GameConfig, console: &mut Console<R, W>) -> Result<Vec<Standing>> {
    let rules = config.rules().context("Invalid board settings")?;
    let roster = config.roster().context("Invalid player markers")?;
    let mut session = Session::new(rules, roster).context("Cannot start a session")?;
    let width = render::marker_width(session.roster());

    loop {
        console.say(console::welcome(rules.win_length()))?;
        console.print(&render::board(session.board().snapshot(), width))?;

        if !play_round(&mut session, console, width)? {
            info!("Input ended mid-round");
            console.say(console::GOODBYE)?;
            break;
        }

        console.say(console::PLAY_AGAIN)?;
        if !console.confirm()? {
            console.say(console::GOODBYE)?;
            break;
        }
        console.say(console::NEW_GAME)?;
        session.new_round()?;
    }

    let standings = session.final_standings();
    console.print(&render::standings(&standings))?;
    info!(rounds = session.rounds_completed(), "Session finished");
    Ok(standings)
}

/// Runs one round to a win or draw. Returns `false` if input ran out first.
fn play_round<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
    width: usize,
) -> Result<bool> {
    loop {
        let board = session.board();
        let (first, last) = (board.first_square_number(), board.last_square_number());
        let marker = session
            .current_player()
            .map(|p| p.marker().clone())
            .context("No player to move")?;
        console.say(console::make_a_move(&marker, first, last))?;

        let Some(square) = console.read_square(session.board())? else {
            return Ok(false);
        };

        let state = session.play(square)?;
        console.print(&render::board(session.board().snapshot(), width))?;
        match state {
            TurnState::Won(_) => {
                info!(%marker, "Round won");
                console.say(console::GAME_WON)?;
                return Ok(true);
            }
            TurnState::Draw => {
                console.say(console::GAME_DRAWN)?;
                return Ok(true);
            }
            TurnState::AwaitingMove(_) => {}
        }
    }
}
