use std::io;

use thiserror::Error;

use crate::chess::piece::PieceKind;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to write transcript: {0}")]
    Io(#[from] io::Error),

    #[error("{piece} move count {count} exceeds the limit of {max}")]
    MoveBudget {
        piece: PieceKind,
        count: u32,
        max: u32,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
