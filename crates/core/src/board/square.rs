//! Board coordinates
//!
//! A `Square` is a (file, rank) pair with both halves in `0..8`. The only way
//! to build one is through a checked constructor, so a `Square` can always be
//! used to index the board.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Number of files and ranks on the board.
pub const BOARD_SIZE: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Square {
    // Rank first so the derived ordering follows `index()`
    rank: u8,
    file: u8,
}

impl Square {
    /// Builds a square from a file (0 = a) and rank (0 = 1).
    pub fn new(file: u8, rank: u8) -> Option<Self> {
        if file < BOARD_SIZE && rank < BOARD_SIZE {
            Some(Self { file, rank })
        } else {
            None
        }
    }

    /// Builds a square from signed coordinates, rejecting anything off the board.
    pub fn from_coords(file: i32, rank: i32) -> Option<Self> {
        let file = u8::try_from(file).ok()?;
        let rank = u8::try_from(rank).ok()?;
        Self::new(file, rank)
    }

    pub fn file(self) -> u8 {
        self.file
    }

    pub fn rank(self) -> u8 {
        self.rank
    }

    /// Row-major index, a1 = 0 and h8 = 63.
    pub fn index(self) -> usize {
        self.rank as usize * BOARD_SIZE as usize + self.file as usize
    }

    /// Shifts the square by a signed (file, rank) delta.
    pub fn offset(self, file_delta: i32, rank_delta: i32) -> Option<Self> {
        let file = (self.file as i32).checked_add(file_delta)?;
        let rank = (self.rank as i32).checked_add(rank_delta)?;
        Self::from_coords(file, rank)
    }

    /// All 64 squares, a1 first, rank by rank.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|rank| (0..BOARD_SIZE).map(move |file| Square { file, rank }))
    }

    pub fn file_char(self) -> char {
        (b'a' + self.file) as char
    }

    pub fn rank_char(self) -> char {
        (b'1' + self.rank) as char
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl FromStr for Square {
    type Err = Error;

    /// Parses a token such as `e4`: a file letter `a`-`h` then a rank digit `1`-`8`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || Error::MalformedMove(format!("bad square '{}'", s));

        let &[file, rank] = s.as_bytes() else {
            return Err(malformed());
        };
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(malformed());
        }
        Square::new(file - b'a', rank - b'1').ok_or_else(malformed)
    }
}

impl TryFrom<String> for Square {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Square> for String {
    fn from(square: Square) -> Self {
        square.to_string()
    }
}
