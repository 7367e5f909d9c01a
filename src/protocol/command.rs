//! Command parsing and responses.

use std::str::FromStr;
use tracing::instrument;

/// Greeting printed when a session starts.
pub const WELCOME_MESSAGE: &str = "Welcome to 98point6 Drop Token!";

/// Usage line printed for unknown or malformed commands.
pub const HELP_MESSAGE: &str = "Commands: PUT <column>, GET, BOARD, EXIT";

/// Command keywords, matched case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::Display)]
#[strum(ascii_case_insensitive, serialize_all = "UPPERCASE")]
pub enum Keyword {
    /// Drop a token.
    Put,
    /// List previous moves.
    Get,
    /// Print the board.
    Board,
    /// End the session.
    Exit,
}

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Drop the current player's token into a 1-based column.
    Put(i64),
    /// Print the move history.
    Get,
    /// Print the board.
    Board,
    /// End the session.
    Exit,
    /// Print the usage line.
    Help,
}

impl Command {
    /// Parses one input line.
    ///
    /// Only the tokens a command needs are read; trailing tokens are
    /// ignored. `PUT` without an integer column is treated as a request for
    /// help, as is a blank line or an unknown keyword.
    #[instrument]
    pub fn parse(line: &str) -> Self {
        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next().and_then(|t| Keyword::from_str(t).ok()) else {
            return Command::Help;
        };

        match keyword {
            Keyword::Put => tokens
                .next()
                .and_then(|t| t.parse::<i64>().ok())
                .map_or(Command::Help, Command::Put),
            Keyword::Get => Command::Get,
            Keyword::Board => Command::Board,
            Keyword::Exit => Command::Exit,
        }
    }
}

/// Outcome of a `PUT`, as printed to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Response {
    /// Token placed, game continues.
    Ok,
    /// Token placed and a line is complete.
    Win,
    /// Token placed and the board is full without a line.
    Draw,
    /// Placement rejected.
    Error,
}
