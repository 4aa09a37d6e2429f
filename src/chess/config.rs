use crate::chess::piece::PieceKind;
use crate::error::{Error, Result};

/// Upper bound accepted by [`MoveBudget::validate`]; also the deepest recursion an emitter reaches.
pub const MAX_MOVES: u32 = 64;

/// Move counts per piece (pure Rust, no files or flags).
///
/// The knight has two counts because its L is printed as a vertical leg followed by a
/// horizontal one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveBudget {
    pub bishop: u32,
    pub rook: u32,
    pub queen: u32,
    pub knight_vertical: u32,
    pub knight_horizontal: u32,
}

impl MoveBudget {
    /// The counts the challenge prints.
    pub const STANDARD: MoveBudget = MoveBudget {
        bishop: 5,
        rook: 5,
        queen: 8,
        knight_vertical: 2,
        knight_horizontal: 1,
    };

    pub fn with_bishop(mut self, n: u32) -> Self {
        self.bishop = n;
        self
    }

    pub fn with_rook(mut self, n: u32) -> Self {
        self.rook = n;
        self
    }

    pub fn with_queen(mut self, n: u32) -> Self {
        self.queen = n;
        self
    }

    pub fn with_knight(mut self, vertical: u32, horizontal: u32) -> Self {
        self.knight_vertical = vertical;
        self.knight_horizontal = horizontal;
        self
    }

    /// Count used for a piece's single-leg movement. For the knight this is the longer
    /// (vertical) leg.
    #[inline]
    pub fn moves(&self, piece: PieceKind) -> u32 {
        match piece {
            PieceKind::Bishop => self.bishop,
            PieceKind::Rook => self.rook,
            PieceKind::Queen => self.queen,
            PieceKind::Knight => self.knight_vertical,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let entries = [
            (PieceKind::Bishop, self.bishop),
            (PieceKind::Rook, self.rook),
            (PieceKind::Queen, self.queen),
            (PieceKind::Knight, self.knight_vertical),
            (PieceKind::Knight, self.knight_horizontal),
        ];
        for (piece, count) in entries {
            if count > MAX_MOVES {
                return Err(Error::MoveBudget {
                    piece,
                    count,
                    max: MAX_MOVES,
                });
            }
        }
        Ok(())
    }
}

impl Default for MoveBudget {
    fn default() -> Self {
        Self::STANDARD
    }
}
