//! Chess Rules Core Library
//!
//! Move legality for standard chess piece movement on an 8x8 board: per-piece
//! geometry, path clearance for sliding pieces, capture versus block
//! semantics and turn ownership. Check, castling, en passant and promotion
//! are not modelled.

pub mod board;
pub mod error;
pub mod game;
pub mod rules;

pub use board::{Board, Piece, PieceKind, Side, Square};
pub use error::{Error, Result};
pub use game::{Command, GameState, Move};
pub use rules::{check_move, is_valid_move, is_valid_move_coords, legal_destinations, Rejection};
