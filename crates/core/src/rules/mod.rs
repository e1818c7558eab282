//! Move validation
//!
//! `check_move` runs a fixed sequence of gates and stops at the first one
//! that fails:
//!
//! 1. both squares on the board (only relevant for raw coordinates)
//! 2. the origin holds a piece of the side to move
//! 3. the move goes somewhere
//! 4. the piece's own geometry, including path clearance for sliders
//! 5. the destination is empty or holds an opposing piece
//!
//! The validator never mutates the board and never panics.

mod pieces;
mod ray;

use serde::Serialize;
use thiserror::Error;

use crate::board::{Board, PieceKind, Side, Square};

pub use ray::{Delta, Ray};

/// Why a move was refused. Only used for diagnostics; callers that need a
/// verdict use [`is_valid_move`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    #[error("square is off the board")]
    OutOfBounds,
    #[error("no piece on the origin square")]
    EmptyOrigin,
    #[error("piece belongs to the other side")]
    NotYourPiece,
    #[error("origin and destination are the same square")]
    NullMove,
    #[error("piece cannot move that way")]
    IllegalGeometry,
    #[error("path is blocked")]
    PathBlocked,
    #[error("nothing to capture")]
    NothingToCapture,
    #[error("destination holds a piece of the same side")]
    OwnPieceAtDestination,
}

/// Checks a move and reports the first gate it fails.
pub fn check_move(board: &Board, from: Square, to: Square, side: Side) -> Result<(), Rejection> {
    let piece = board.piece_at(from).ok_or(Rejection::EmptyOrigin)?;
    if piece.side != side {
        return Err(Rejection::NotYourPiece);
    }
    if from == to {
        return Err(Rejection::NullMove);
    }

    match piece.kind {
        kind if kind.is_slider() => pieces::slider(board, kind, from, to)?,
        PieceKind::Pawn => pieces::pawn(board, from, to, side)?,
        PieceKind::Knight => pieces::knight(from, to)?,
        _ => pieces::king(from, to)?,
    }

    if board.side_at(to) == Some(side) {
        return Err(Rejection::OwnPieceAtDestination);
    }
    Ok(())
}

/// Same as [`check_move`] for raw (file, rank) pairs, which may be off the board.
pub fn check_move_coords(
    board: &Board,
    from: (i32, i32),
    to: (i32, i32),
    side: Side,
) -> Result<(), Rejection> {
    let (Some(from), Some(to)) = (
        Square::from_coords(from.0, from.1),
        Square::from_coords(to.0, to.1),
    ) else {
        return Err(Rejection::OutOfBounds);
    };
    check_move(board, from, to, side)
}

/// Whether `side` may move the piece on `from` to `to`.
pub fn is_valid_move(board: &Board, from: Square, to: Square, side: Side) -> bool {
    check_move(board, from, to, side).is_ok()
}

pub fn is_valid_move_coords(board: &Board, from: (i32, i32), to: (i32, i32), side: Side) -> bool {
    check_move_coords(board, from, to, side).is_ok()
}

/// Every square the piece on `from` may legally move to, a1 first.
pub fn legal_destinations(board: &Board, from: Square, side: Side) -> Vec<Square> {
    Square::all()
        .filter(|&to| is_valid_move(board, from, to, side))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Piece;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn board_with(pieces: &[(&str, PieceKind, Side)]) -> Board {
        let mut board = Board::empty();
        for &(at, kind, side) in pieces {
            board.set(sq(at), Piece::new(kind, side));
        }
        board
    }

    #[test]
    fn test_out_of_bounds_coords() {
        let board = Board::standard();
        assert_eq!(
            check_move_coords(&board, (4, 1), (4, 8), Side::White),
            Err(Rejection::OutOfBounds)
        );
        assert_eq!(
            check_move_coords(&board, (-1, 1), (4, 3), Side::White),
            Err(Rejection::OutOfBounds)
        );
        assert!(is_valid_move_coords(&board, (4, 1), (4, 3), Side::White));
    }

    #[test]
    fn test_ownership_gate() {
        let board = Board::standard();
        assert_eq!(
            check_move(&board, sq("e4"), sq("e5"), Side::White),
            Err(Rejection::EmptyOrigin)
        );
        assert_eq!(
            check_move(&board, sq("e7"), sq("e5"), Side::White),
            Err(Rejection::NotYourPiece)
        );
        assert_eq!(
            check_move(&board, sq("e2"), sq("e4"), Side::Black),
            Err(Rejection::NotYourPiece)
        );
    }

    #[test]
    fn test_null_move_rejected_for_every_kind() {
        for kind in PieceKind::BACK_RANK.into_iter().chain([PieceKind::Pawn]) {
            let board = board_with(&[("d4", kind, Side::White)]);
            assert_eq!(
                check_move(&board, sq("d4"), sq("d4"), Side::White),
                Err(Rejection::NullMove),
                "{:?}",
                kind
            );
        }
    }

    #[test]
    fn test_own_piece_at_destination_rejected_for_every_kind() {
        let cases = [
            (PieceKind::King, "e1", "e2"),
            (PieceKind::Knight, "g1", "e2"),
            (PieceKind::Rook, "a1", "a2"),
            (PieceKind::Bishop, "c1", "d2"),
            (PieceKind::Queen, "d1", "d2"),
        ];
        let board = Board::standard();
        for (kind, from, to) in cases {
            assert_eq!(
                check_move(&board, sq(from), sq(to), Side::White),
                Err(Rejection::OwnPieceAtDestination),
                "{:?} {}-{}",
                kind,
                from,
                to
            );
        }
    }

    #[test]
    fn test_captures_allowed() {
        let board = board_with(&[
            ("d4", PieceKind::Queen, Side::White),
            ("d8", PieceKind::Rook, Side::Black),
            ("h8", PieceKind::Bishop, Side::Black),
            ("e6", PieceKind::Knight, Side::Black),
        ]);
        assert!(is_valid_move(&board, sq("d4"), sq("d8"), Side::White));
        assert!(is_valid_move(&board, sq("d4"), sq("h8"), Side::White));
        assert!(!is_valid_move(&board, sq("d4"), sq("e6"), Side::White));
    }

    #[test]
    fn test_legal_destinations_from_start() {
        let board = Board::standard();
        assert_eq!(
            legal_destinations(&board, sq("g1"), Side::White),
            vec![sq("f3"), sq("h3")]
        );
        assert_eq!(
            legal_destinations(&board, sq("e2"), Side::White),
            vec![sq("e3"), sq("e4")]
        );
        assert!(legal_destinations(&board, sq("a1"), Side::White).is_empty());
        assert!(legal_destinations(&board, sq("e7"), Side::White).is_empty());

        let total: usize = board
            .pieces()
            .map(|(from, _)| legal_destinations(&board, from, Side::White).len())
            .sum();
        assert_eq!(total, 20);
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(Rejection::PathBlocked.to_string(), "path is blocked");
        assert_eq!(
            Rejection::NotYourPiece.to_string(),
            "piece belongs to the other side"
        );
    }
}
