//! Recursive move emitters.
//!
//! Each emitter prints one move and recurses on `remaining - 1`; `remaining == 0` prints
//! nothing. Counts are unsigned, so every call chain reaches the base case.

use crate::chess::direction::{Direction, DIAGONAL_UP_RIGHT};
use crate::error::Result;
use crate::transcript::TranscriptLike;

/// Bishop: `remaining` diagonal steps, each printed as "Direita" then "Cima".
pub fn bishop_diagonal<T: TranscriptLike + ?Sized>(out: &mut T, remaining: u32) -> Result<()> {
    if remaining == 0 {
        return Ok(());
    }
    for dir in DIAGONAL_UP_RIGHT {
        out.step(dir)?;
    }
    bishop_diagonal(out, remaining - 1)
}

/// Rook: `remaining` steps to the right.
pub fn rook_right<T: TranscriptLike + ?Sized>(out: &mut T, remaining: u32) -> Result<()> {
    if remaining == 0 {
        return Ok(());
    }
    out.step(Direction::Right)?;
    rook_right(out, remaining - 1)
}

/// Queen: `remaining` steps to the left.
pub fn queen_left<T: TranscriptLike + ?Sized>(out: &mut T, remaining: u32) -> Result<()> {
    if remaining == 0 {
        return Ok(());
    }
    out.step(Direction::Left)?;
    queen_left(out, remaining - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::Coord;
    use crate::transcript::MoveLog;

    #[test]
    fn zero_remaining_emits_nothing() {
        let mut log = MoveLog::new();
        bishop_diagonal(&mut log, 0).unwrap();
        rook_right(&mut log, 0).unwrap();
        queen_left(&mut log, 0).unwrap();
        assert!(log.steps.is_empty());
    }

    #[test]
    fn bishop_emits_pairs_in_order() {
        let mut log = MoveLog::new();
        bishop_diagonal(&mut log, 3).unwrap();
        assert_eq!(log.steps.len(), 6);
        for pair in log.steps.chunks(2) {
            assert_eq!(pair, &[Direction::Right, Direction::Up]);
        }
        assert_eq!(log.displacement(), Coord::new(3, 3));
    }

    #[test]
    fn single_token_emitters() {
        let mut log = MoveLog::new();
        rook_right(&mut log, 5).unwrap();
        assert_eq!(log.steps, vec![Direction::Right; 5]);

        let mut log = MoveLog::new();
        queen_left(&mut log, 8).unwrap();
        assert_eq!(log.steps, vec![Direction::Left; 8]);
        assert_eq!(log.displacement(), Coord::new(-8, 0));
    }
}
