use std::fmt;

use crate::coord::Coord;

/// A single move token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Up,
    Left,
    Down,
}

impl Direction {
    /// Text written to the transcript for this token.
    #[inline]
    pub fn token(self) -> &'static str {
        match self {
            Direction::Right => "Direita",
            Direction::Up => "Cima",
            Direction::Left => "Esquerda",
            Direction::Down => "Baixo",
        }
    }

    /// Unit step for this token.
    #[inline]
    pub fn delta(self) -> Coord {
        match self {
            Direction::Right => Coord::new(1, 0),
            Direction::Up => Coord::new(0, 1),
            Direction::Left => Coord::new(-1, 0),
            Direction::Down => Coord::new(0, -1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// One diagonal step up and to the right, printed as two tokens.
pub const DIAGONAL_UP_RIGHT: [Direction; 2] = [Direction::Right, Direction::Up];
