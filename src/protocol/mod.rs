//! Line-based text protocol for playing Drop Token.
//!
//! One command per line, whitespace-separated, keyword case-insensitive:
//! `PUT <column>`, `GET`, `BOARD`, `EXIT`. Anything else prints the help
//! line. The protocol never lets malformed input reach the game manager.

mod command;
mod command_loop;

pub use command::{Command, HELP_MESSAGE, Keyword, Response, WELCOME_MESSAGE};
pub use command_loop::{CommandLoop, SessionSummary};
