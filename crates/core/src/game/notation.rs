//! Move text as typed by a player: `e2 to e4`, or `exit`

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::Square;
use crate::error::{Error, Result};

/// Separator between the two square tokens.
pub const MOVE_SEPARATOR: &str = " to ";

/// Quit command for interactive sessions.
pub const EXIT_COMMAND: &str = "exit";

/// A proposed move: origin and destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.from, MOVE_SEPARATOR, self.to)
    }
}

impl FromStr for Move {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        let Some((from, to)) = text.split_once(MOVE_SEPARATOR) else {
            return Err(Error::MalformedMove(format!(
                "expected '<square>{}<square>', got '{}'",
                MOVE_SEPARATOR, text
            )));
        };
        Ok(Move::new(from.parse()?, to.parse()?))
    }
}

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Move),
    Exit,
}

pub fn parse_command(line: &str) -> Result<Command> {
    let line = line.trim();
    if line == EXIT_COMMAND {
        return Ok(Command::Exit);
    }
    line.parse().map(Command::Move)
}
