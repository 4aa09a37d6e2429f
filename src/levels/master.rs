use crate::chess::config::MoveBudget;
use crate::chess::direction::Direction;
use crate::chess::piece::PieceKind;
use crate::error::Result;
use crate::levels::squares;
use crate::recursive::{bishop_diagonal, queen_left, rook_right};
use crate::transcript::TranscriptLike;

/// Recursive bishop, rook and queen, then one knight L via [`KnightLeg`].
pub fn run<T: TranscriptLike + ?Sized>(out: &mut T, budget: &MoveBudget) -> Result<()> {
    out.line(&format!(
        "{}: {} na diagonal direita para cima (recursivo)",
        PieceKind::Bishop,
        squares(budget.bishop)
    ))?;
    tracing::debug!(piece = %PieceKind::Bishop, remaining = budget.bishop, "recursive emitter");
    bishop_diagonal(out, budget.bishop)?;

    out.blank()?;
    out.line(&format!(
        "{}: {} para a direita (recursivo)",
        PieceKind::Rook,
        squares(budget.rook)
    ))?;
    tracing::debug!(piece = %PieceKind::Rook, remaining = budget.rook, "recursive emitter");
    rook_right(out, budget.rook)?;

    out.blank()?;
    out.line(&format!(
        "{}: {} para a esquerda (recursivo)",
        PieceKind::Queen,
        squares(budget.queen)
    ))?;
    tracing::debug!(piece = %PieceKind::Queen, remaining = budget.queen, "recursive emitter");
    queen_left(out, budget.queen)?;

    out.blank()?;
    out.line(&format!(
        "{}: 1 vez em L para cima a direita (loops com break/continue)",
        PieceKind::Knight
    ))?;
    let phases = KnightLeg::new(budget.knight_vertical, budget.knight_horizontal).run(out)?;
    tracing::debug!(checks = phases.len(), "knight loop finished");
    Ok(())
}

/// Where the knight loop stands between two condition checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnightPhase {
    /// Vertical leg still has steps left.
    BothPending,
    /// Vertical leg complete, horizontal leg has steps left.
    VerticalDone,
    /// Both legs complete.
    Done,
}

/// Counter pair for the knight's L: up first, then right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnightLeg {
    vertical: u32,
    horizontal: u32,
    vertical_bound: u32,
    horizontal_bound: u32,
}

impl KnightLeg {
    pub fn new(vertical_bound: u32, horizontal_bound: u32) -> Self {
        Self {
            vertical: 0,
            horizontal: 0,
            vertical_bound,
            horizontal_bound,
        }
    }

    #[inline]
    pub fn phase(&self) -> KnightPhase {
        if self.vertical < self.vertical_bound {
            KnightPhase::BothPending
        } else if self.horizontal < self.horizontal_bound {
            KnightPhase::VerticalDone
        } else {
            KnightPhase::Done
        }
    }

    /// Print the L and return the phase seen at every condition check, ending with
    /// [`KnightPhase::Done`].
    ///
    /// Finishing the vertical leg with horizontal work pending jumps straight back to the
    /// condition check; finishing the horizontal leg leaves the loop without re-checking.
    pub fn run<T: TranscriptLike + ?Sized>(&mut self, out: &mut T) -> Result<Vec<KnightPhase>> {
        let mut phases = Vec::new();

        while self.vertical < self.vertical_bound || self.horizontal < self.horizontal_bound {
            phases.push(self.phase());

            if self.vertical < self.vertical_bound {
                out.step(Direction::Up)?;
                self.vertical += 1;

                if self.vertical == self.vertical_bound && self.horizontal < self.horizontal_bound {
                    tracing::trace!("vertical leg done, skipping to next check");
                    continue;
                }
            }

            if self.phase() == KnightPhase::VerticalDone {
                out.step(Direction::Right)?;
                self.horizontal += 1;

                if self.horizontal == self.horizontal_bound {
                    tracing::trace!("horizontal leg done, leaving loop");
                    break;
                }
            }
        }

        debug_assert_eq!(self.phase(), KnightPhase::Done);
        phases.push(KnightPhase::Done);
        Ok(phases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::Coord;
    use crate::transcript::MoveLog;

    #[test]
    fn standard_knight_goes_up_twice_then_right() {
        let mut log = MoveLog::new();
        let phases = KnightLeg::new(2, 1).run(&mut log).unwrap();
        assert_eq!(log.steps, vec![Direction::Up, Direction::Up, Direction::Right]);
        assert_eq!(
            phases,
            vec![
                KnightPhase::BothPending,
                KnightPhase::BothPending,
                KnightPhase::VerticalDone,
                KnightPhase::Done,
            ]
        );
        assert_eq!(log.displacement(), Coord::new(1, 2));
    }

    #[test]
    fn zero_vertical_goes_straight_right() {
        let mut log = MoveLog::new();
        let phases = KnightLeg::new(0, 1).run(&mut log).unwrap();
        assert_eq!(log.steps, vec![Direction::Right]);
        assert_eq!(phases, vec![KnightPhase::VerticalDone, KnightPhase::Done]);
    }

    #[test]
    fn zero_horizontal_ends_on_condition() {
        let mut log = MoveLog::new();
        let phases = KnightLeg::new(2, 0).run(&mut log).unwrap();
        assert_eq!(log.steps, vec![Direction::Up, Direction::Up]);
        assert_eq!(phases.last(), Some(&KnightPhase::Done));
    }

    #[test]
    fn empty_leg_prints_nothing() {
        let mut log = MoveLog::new();
        let phases = KnightLeg::new(0, 0).run(&mut log).unwrap();
        assert!(log.steps.is_empty());
        assert_eq!(phases, vec![KnightPhase::Done]);
    }
}
