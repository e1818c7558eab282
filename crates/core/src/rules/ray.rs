//! Straight-line walks between two squares
//!
//! Rooks, bishops and queens all share the same path clearance check: step
//! from the origin towards the destination one unit at a time and require
//! every square strictly in between to be empty.

use crate::board::{Board, Square};

/// Signed (file, rank) difference between two squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delta {
    pub file: i32,
    pub rank: i32,
}

impl Delta {
    pub fn between(from: Square, to: Square) -> Self {
        Self {
            file: to.file() as i32 - from.file() as i32,
            rank: to.rank() as i32 - from.rank() as i32,
        }
    }

    pub fn abs(self) -> (i32, i32) {
        (self.file.abs(), self.rank.abs())
    }

    pub fn is_null(self) -> bool {
        self.file == 0 && self.rank == 0
    }

    /// Same rank or same file, but not both.
    pub fn is_orthogonal(self) -> bool {
        (self.file == 0) != (self.rank == 0)
    }

    pub fn is_diagonal(self) -> bool {
        !self.is_null() && self.file.abs() == self.rank.abs()
    }
}

/// A walk of `length` unit steps from `origin` in direction `step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ray {
    origin: Square,
    step: (i32, i32),
    length: i32,
}

impl Ray {
    /// The ray from `from` to `to`, if the two lie on a shared rank, file or
    /// diagonal and differ.
    pub fn towards(from: Square, to: Square) -> Option<Self> {
        let delta = Delta::between(from, to);
        if !delta.is_orthogonal() && !delta.is_diagonal() {
            return None;
        }
        Some(Self {
            origin: from,
            step: (delta.file.signum(), delta.rank.signum()),
            length: delta.file.abs().max(delta.rank.abs()),
        })
    }

    /// Squares strictly between the two ends.
    pub fn between(self) -> impl Iterator<Item = Square> {
        (1..self.length).filter_map(move |i| self.origin.offset(self.step.0 * i, self.step.1 * i))
    }

    /// Whether every square strictly between the ends is empty.
    pub fn is_clear(self, board: &Board) -> bool {
        self.between().all(|sq| board.is_empty(sq))
    }
}
