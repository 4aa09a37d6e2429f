use crate::chess::config::MoveBudget;
use crate::chess::direction::{Direction, DIAGONAL_UP_RIGHT};
use crate::chess::piece::PieceKind;
use crate::error::Result;
use crate::levels::squares;
use crate::transcript::TranscriptLike;

/// Bishop with a counted loop, rook with a pre-checked loop, queen with a post-checked loop.
pub fn run<T: TranscriptLike + ?Sized>(out: &mut T, budget: &MoveBudget) -> Result<()> {
    out.line(&format!(
        "{}: {} na diagonal superior direita",
        PieceKind::Bishop,
        squares(budget.bishop)
    ))?;
    for _ in 0..budget.bishop {
        for dir in DIAGONAL_UP_RIGHT {
            out.step(dir)?;
        }
    }

    out.blank()?;
    out.line(&format!(
        "{}: {} para a direita",
        PieceKind::Rook,
        squares(budget.rook)
    ))?;
    let mut count = 0;
    while count < budget.rook {
        out.step(Direction::Right)?;
        count += 1;
    }

    out.blank()?;
    out.line(&format!(
        "{}: {} para a esquerda",
        PieceKind::Queen,
        squares(budget.queen)
    ))?;
    // Post-checked: the body runs before the bound is tested.
    let mut queen_count = 0;
    loop {
        out.step(Direction::Left)?;
        queen_count += 1;
        if queen_count >= budget.queen {
            break;
        }
    }
    Ok(())
}
