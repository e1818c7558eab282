//! Error types for chess-rules-core

use thiserror::Error;

use crate::rules::Rejection;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed move: {0}")]
    MalformedMove(String),

    #[error("Illegal move {mv}: {reason}")]
    IllegalMove { mv: String, reason: Rejection },

    #[error("FEN parsing error: {0}")]
    Fen(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
