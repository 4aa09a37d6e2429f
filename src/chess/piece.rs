use std::fmt;

/// The pieces whose movements the demo prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    Bishop,
    Rook,
    Queen,
    Knight,
}

impl PieceKind {
    pub const ALL: [PieceKind; 4] = [
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::Knight,
    ];

    /// Name printed in section headings.
    #[inline]
    pub fn display_name(self) -> &'static str {
        use PieceKind::*;
        match self {
            Bishop => "Bispo",
            Rook => "Torre",
            Queen => "Rainha",
            Knight => "Cavalo",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
