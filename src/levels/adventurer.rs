use crate::chess::config::MoveBudget;
use crate::chess::direction::Direction;
use crate::chess::piece::PieceKind;
use crate::error::Result;
use crate::levels::squares;
use crate::transcript::TranscriptLike;

/// Knight "L" with nested loops: each vertical step is followed by the full horizontal leg.
///
/// This prints down/left interleaved rather than a geometric knight jump; the transcript keeps
/// that shape.
pub fn run<T: TranscriptLike + ?Sized>(out: &mut T, budget: &MoveBudget) -> Result<()> {
    out.line(&format!(
        "{}: Movimento em L ({} para baixo e {} para esquerda)",
        PieceKind::Knight,
        squares(budget.knight_vertical),
        squares(budget.knight_horizontal)
    ))?;

    for _ in 0..budget.knight_vertical {
        out.step(Direction::Down)?;

        let mut horizontal = 0;
        while horizontal < budget.knight_horizontal {
            out.step(Direction::Left)?;
            horizontal += 1;
        }
    }
    Ok(())
}
