use std::ops::{Add, AddAssign, Mul};

/// Board-free displacement: `x` grows to the right ("Direita"), `y` grows upward ("Cima").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Number of unit steps needed to cover this displacement along the axes.
    #[inline]
    pub fn l1(self) -> i32 {
        self.x.abs() + self.y.abs()
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Self::Output {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Coord {
    #[inline]
    fn add_assign(&mut self, rhs: Coord) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Mul<i32> for Coord {
    type Output = Coord;

    #[inline]
    fn mul(self, rhs: i32) -> Coord {
        Coord {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}
