//! Per-piece movement geometry
//!
//! Each checker assumes the dispatcher has already established that `from`
//! holds a piece of the moving side and that `from != to`. Own-piece
//! destinations are rejected afterwards by the dispatcher for every kind.

use super::ray::{Delta, Ray};
use super::Rejection;
use crate::board::{Board, PieceKind, Side, Square};

type Verdict = Result<(), Rejection>;

pub fn pawn(board: &Board, from: Square, to: Square, side: Side) -> Verdict {
    let delta = Delta::between(from, to);
    let forward = side.forward();

    // Straight pushes never capture
    if delta.file == 0 {
        if delta.rank == forward {
            return if board.is_empty(to) {
                Ok(())
            } else {
                Err(Rejection::PathBlocked)
            };
        }
        if delta.rank == 2 * forward {
            if from.rank() != side.pawn_rank() {
                return Err(Rejection::IllegalGeometry);
            }
            let blocked = from
                .offset(0, forward)
                .map_or(true, |middle| !board.is_empty(middle));
            return if blocked || !board.is_empty(to) {
                Err(Rejection::PathBlocked)
            } else {
                Ok(())
            };
        }
        return Err(Rejection::IllegalGeometry);
    }

    if delta.file.abs() == 1 && delta.rank == forward {
        return match board.side_at(to) {
            Some(target) if target != side => Ok(()),
            Some(_) => Err(Rejection::OwnPieceAtDestination),
            None => Err(Rejection::NothingToCapture),
        };
    }

    Err(Rejection::IllegalGeometry)
}

/// Rook, bishop and queen: shape check, then the shared ray walk.
pub fn slider(board: &Board, kind: PieceKind, from: Square, to: Square) -> Verdict {
    let delta = Delta::between(from, to);
    let admissible = match kind {
        PieceKind::Rook => delta.is_orthogonal(),
        PieceKind::Bishop => delta.is_diagonal(),
        PieceKind::Queen => delta.is_orthogonal() || delta.is_diagonal(),
        _ => false,
    };
    if !admissible {
        return Err(Rejection::IllegalGeometry);
    }

    let ray = Ray::towards(from, to).ok_or(Rejection::IllegalGeometry)?;
    if ray.is_clear(board) {
        Ok(())
    } else {
        Err(Rejection::PathBlocked)
    }
}

pub fn knight(from: Square, to: Square) -> Verdict {
    match Delta::between(from, to).abs() {
        (1, 2) | (2, 1) => Ok(()),
        _ => Err(Rejection::IllegalGeometry),
    }
}

pub fn king(from: Square, to: Square) -> Verdict {
    let (files, ranks) = Delta::between(from, to).abs();
    if files <= 1 && ranks <= 1 {
        Ok(())
    } else {
        Err(Rejection::IllegalGeometry)
    }
}
