//! Board representation: squares, pieces and the 8x8 grid

mod grid;
mod piece;
mod square;

pub(crate) use grid::parse_fen;
pub use grid::Board;
pub use piece::{Piece, PieceKind, Side};
pub use square::{Square, BOARD_SIZE};
