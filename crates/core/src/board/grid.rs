//! The 8x8 board

use std::fmt;

use serde::{Deserialize, Serialize};
use shakmaty::{fen::Fen, Color};

use super::piece::{Piece, PieceKind, Side};
use super::square::{Square, BOARD_SIZE};
use crate::error::{Error, Result};

/// Row-major grid of optional pieces. Row 0 is rank 1, White's back rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    pub fn empty() -> Self {
        Self {
            rows: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    /// The standard starting position.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for side in [Side::White, Side::Black] {
            for (file, kind) in PieceKind::BACK_RANK.into_iter().enumerate() {
                board.rows[side.back_rank() as usize][file] = Some(Piece::new(kind, side));
                board.rows[side.pawn_rank() as usize][file] =
                    Some(Piece::new(PieceKind::Pawn, side));
            }
        }
        board
    }

    /// Reads the piece placement of a FEN record. The rest of the record is
    /// checked for syntax but otherwise ignored.
    pub fn from_fen(fen: &str) -> Result<Self> {
        parse_fen(fen).map(|(board, _)| board)
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.rows[square.rank() as usize][square.file() as usize]
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    pub fn side_at(&self, square: Square) -> Option<Side> {
        self.piece_at(square).map(|p| p.side)
    }

    pub fn set(&mut self, square: Square, piece: Piece) {
        self.rows[square.rank() as usize][square.file() as usize] = Some(piece);
    }

    /// Empties a square, returning what stood there.
    pub fn clear(&mut self, square: Square) -> Option<Piece> {
        self.rows[square.rank() as usize][square.file() as usize].take()
    }

    /// Moves whatever stands on `from` to `to` without any rule checks.
    /// Returns the piece that was on `to`, if any.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.clear(from);
        let captured = self.clear(to);
        if let Some(piece) = moving {
            self.set(to, piece);
        }
        captured
    }

    pub fn occupied_count(&self) -> usize {
        self.rows.iter().flatten().filter(|sq| sq.is_some()).count()
    }

    /// Occupied squares with their pieces, a1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|p| (sq, p)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    /// File header, then one line per rank starting at rank 1. Empty squares
    /// print as a single space.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for (row, squares) in self.rows.iter().enumerate() {
            write!(f, "{} ", row + 1)?;
            for square in squares {
                let marker = square.map(Piece::to_char).unwrap_or(' ');
                write!(f, "{} ", marker)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parses a FEN record into our board and the side to move.
pub(crate) fn parse_fen(fen: &str) -> Result<(Board, Side)> {
    let setup = fen
        .trim()
        .parse::<Fen>()
        .map_err(|e| Error::Fen(format!("{}: {}", fen, e)))?
        .into_setup();

    let mut board = Board::empty();
    for sq in shakmaty::Square::ALL {
        let Some(piece) = setup.board.piece_at(sq) else {
            continue;
        };
        let file = sq.file().char() as u8 - b'a';
        let rank = sq.rank().char() as u8 - b'1';
        let (Some(square), Some(piece)) = (Square::new(file, rank), Piece::from_char(piece.char()))
        else {
            return Err(Error::Fen(format!("{}: unsupported square {}", fen, sq)));
        };
        board.set(square, piece);
    }

    let side = match setup.turn {
        Color::White => Side::White,
        Color::Black => Side::Black,
    };
    Ok((board, side))
}
