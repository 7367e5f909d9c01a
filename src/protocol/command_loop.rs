//! Interactive command loop driving a [`GameManager`].

use super::command::{Command, HELP_MESSAGE, Response, WELCOME_MESSAGE};
use crate::games::drop_token::{GameManager, GameStatus, Player};
use std::borrow::Cow;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Reads commands line by line and writes responses.
///
/// The loop ends on `EXIT` or end of input. Game end is reported but not
/// enforced: after `WIN` or `DRAW` further `PUT`s still reach the manager.
#[derive(Debug)]
pub struct CommandLoop<R, W> {
    game: GameManager,
    input: R,
    output: W,
    banner: bool,
}

/// What happened during a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_getters::Getters)]
pub struct SessionSummary {
    /// Lines read, including the final `EXIT` if there was one.
    commands: usize,
    /// Whether the session ended with `EXIT` rather than end of input.
    exited: bool,
    /// Status of the game when the session ended.
    status: GameStatus,
}

impl<R: BufRead, W: Write> CommandLoop<R, W> {
    /// Creates a loop over a fresh game.
    pub fn new(input: R, output: W) -> Self {
        Self::with_game(GameManager::new(), input, output)
    }

    /// Creates a loop over an existing game.
    pub fn with_game(game: GameManager, input: R, output: W) -> Self {
        Self {
            game,
            input,
            output,
            banner: true,
        }
    }

    /// Enables or disables the welcome greeting.
    pub fn banner(mut self, banner: bool) -> Self {
        self.banner = banner;
        self
    }

    /// Returns the game being played.
    pub fn game(&self) -> &GameManager {
        &self.game
    }

    /// Consumes the loop and returns the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until `EXIT` or end of input.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> std::io::Result<SessionSummary> {
        info!("Drop Token session started");
        if self.banner {
            writeln!(self.output, "{}", WELCOME_MESSAGE)?;
        }
        writeln!(self.output, "{}", HELP_MESSAGE)?;
        self.output.flush()?;

        let mut commands = 0;
        let mut exited = false;
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                debug!("End of input");
                break;
            }
            commands += 1;

            // Undecodable bytes become U+FFFD, which parses as an unknown command.
            let line = String::from_utf8_lossy(&buf);
            if matches!(line, Cow::Owned(_)) {
                debug!(bytes = buf.len(), "Line is not valid UTF-8");
            }
            let command = Command::parse(&line);
            if command == Command::Exit {
                exited = true;
                break;
            }
            self.execute(command)?;
            self.output.flush()?;
        }

        let summary = SessionSummary {
            commands,
            exited,
            status: self.game.status(),
        };
        info!(
            ?summary,
            finished = summary.status.is_terminal(),
            "Drop Token session finished"
        );
        Ok(summary)
    }

    /// Executes a single command, writing its output.
    #[instrument(skip(self))]
    pub fn execute(&mut self, command: Command) -> std::io::Result<()> {
        match command {
            Command::Put(column) => {
                let response = self.put(column);
                writeln!(self.output, "{}", response)
            }
            Command::Get => {
                for column in self.game.previous_moves() {
                    writeln!(self.output, "{}", column)?;
                }
                Ok(())
            }
            Command::Board => write!(self.output, "{}", self.game.render_board()),
            Command::Help => writeln!(self.output, "{}", HELP_MESSAGE),
            Command::Exit => Ok(()),
        }
    }

    /// Attempts a placement and classifies the result.
    ///
    /// Both players are checked for a line after every successful placement.
    fn put(&mut self, column: i64) -> Response {
        if let Err(e) = self.game.try_place(column) {
            debug!(error = %e, "Invalid move");
            return Response::Error;
        }

        if self.game.check_win(Player::One) || self.game.check_win(Player::Two) {
            Response::Win
        } else if self.game.is_full() {
            Response::Draw
        } else {
            Response::Ok
        }
    }
}
