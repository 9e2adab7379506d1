//! Token-based console input and the game's message text.

use std::collections::VecDeque;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use strictly_ninarow::Board;
use tracing::{debug, instrument};

/// Welcome line naming the win length.
pub fn welcome(win_length: usize) -> String {
    format!("Welcome to the TicTacToe game! To win the game be the first to get {win_length} in a row.")
}

/// Per-turn prompt.
pub fn make_a_move(marker: impl Display, first: usize, last: usize) -> String {
    format!("Player {marker} > Please make a move by entering a number from {first} to {last}:")
}

/// Reprompt for a non-number or out-of-range square.
pub fn not_a_valid_number(first: usize, last: usize) -> String {
    format!("Sorry your move must be a number from {first} to {last}. Try again:")
}

/// Win announcement.
pub const GAME_WON: &str = "Congratulations, you have won the game!";
/// Reprompt for a taken square.
pub const SQUARE_TAKEN: &str = "Sorry this square has been taken, please try again:";
/// Draw announcement.
pub const GAME_DRAWN: &str = "Sorry there are no moves left. This game ends in a draw!";
/// Play-again question.
pub const PLAY_AGAIN: &str = "Would you like to play again? (Y/N)";
/// Reprompt for anything but Y or N.
pub const REPLY_Y_OR_N: &str = "Sorry, please reply with Y or N:";
/// Printed before a new round.
pub const NEW_GAME: &str = "Ok, starting new game...\n";
/// Printed when the session ends.
pub const GOODBYE: &str = "Thank you for playing!\n";

/// Reads whitespace-separated tokens from `R` and writes lines to `W`.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps an input and an output stream.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Writes one line.
    pub fn say(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.output, "{message}")?;
        self.output.flush()
    }

    /// Writes text as-is.
    pub fn print(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    /// Next whitespace-separated token, or `None` at end of input.
    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Reads until the player names an open square on `board`.
    ///
    /// Non-numbers and numbers off the board get one reprompt; taken squares
    /// get another. Returns `None` if input runs out first.
    #[instrument(skip(self, board), fields(last = board.last_square_number()))]
    pub fn read_square(&mut self, board: &Board) -> io::Result<Option<usize>> {
        let (first, last) = (board.first_square_number(), board.last_square_number());
        while let Some(token) = self.next_token()? {
            let Ok(square) = token.parse::<usize>() else {
                debug!(%token, "Not a number");
                self.say(not_a_valid_number(first, last))?;
                continue;
            };
            match board.is_occupied(square) {
                Ok(false) => return Ok(Some(square)),
                Ok(true) => {
                    debug!(square, "Square taken");
                    self.say(SQUARE_TAKEN)?;
                }
                Err(_) => {
                    debug!(square, "Square out of range");
                    self.say(not_a_valid_number(first, last))?;
                }
            }
        }
        Ok(None)
    }

    /// Reads a case-insensitive Y or N. End of input counts as N.
    #[instrument(skip(self))]
    pub fn confirm(&mut self) -> io::Result<bool> {
        while let Some(token) = self.next_token()? {
            if token.eq_ignore_ascii_case("y") {
                return Ok(true);
            }
            if token.eq_ignore_ascii_case("n") {
                return Ok(false);
            }
            self.say(REPLY_Y_OR_N)?;
        }
        Ok(false)
    }

    /// Gives back the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}
