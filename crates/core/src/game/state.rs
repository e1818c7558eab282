//! Game state: the board plus whose turn it is

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::notation::Move;
use crate::board::{parse_fen, Board, Piece, Side, Square};
use crate::error::{Error, Result};
use crate::rules::{self, Rejection};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    side_to_move: Side,
}

impl GameState {
    /// Standard starting position, White to move.
    pub fn new() -> Self {
        Self::with_board(Board::standard(), Side::White)
    }

    pub fn with_board(board: Board, side_to_move: Side) -> Self {
        Self {
            board,
            side_to_move,
        }
    }

    /// Piece placement and side to move from a FEN record. Castling rights,
    /// en passant and clocks are not tracked.
    pub fn from_fen(fen: &str) -> Result<Self> {
        let (board, side) = parse_fen(fen)?;
        Ok(Self::with_board(board, side))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    pub fn check(&self, mv: Move) -> std::result::Result<(), Rejection> {
        rules::check_move(&self.board, mv.from, mv.to, self.side_to_move)
    }

    pub fn is_legal(&self, mv: Move) -> bool {
        self.check(mv).is_ok()
    }

    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        rules::legal_destinations(&self.board, from, self.side_to_move)
    }

    /// Validates and applies a move, then hands the turn over.
    /// Returns the captured piece, if any.
    pub fn play(&mut self, mv: Move) -> Result<Option<Piece>> {
        if let Err(reason) = self.check(mv) {
            debug!(%mv, %reason, side = self.side_to_move.as_str(), "move rejected");
            return Err(Error::IllegalMove {
                mv: mv.to_string(),
                reason,
            });
        }

        let captured = self.board.relocate(mv.from, mv.to);
        info!(
            %mv,
            side = self.side_to_move.as_str(),
            captured = ?captured.map(Piece::to_char),
            "move applied"
        );
        self.side_to_move = self.side_to_move.opponent();
        Ok(captured)
    }

    /// Parses move text such as `e2 to e4` and plays it.
    pub fn play_text(&mut self, text: &str) -> Result<Option<Piece>> {
        let mv: Move = text.parse()?;
        self.play(mv)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
