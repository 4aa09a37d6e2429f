//! Entry routine: banner, the three levels, closing separator.

use crate::chess::config::MoveBudget;
use crate::error::Result;
use crate::levels::Level;
use crate::transcript::TranscriptLike;

pub const BANNER_RULE: &str = "====================================";
pub const BANNER_TITLE: &str = "   DESAFIO DE XADREZ - MATECHECK   ";
pub const CLOSING_TITLE: &str = "FIM";

/// The full challenge run for one move table.
#[derive(Debug, Clone, Copy)]
pub struct Challenge {
    budget: MoveBudget,
}

impl Challenge {
    pub fn new(budget: MoveBudget) -> Result<Self> {
        budget.validate()?;
        Ok(Self { budget })
    }

    /// The challenge as published: [`MoveBudget::STANDARD`].
    pub fn standard() -> Self {
        Self {
            budget: MoveBudget::STANDARD,
        }
    }

    #[inline]
    pub fn budget(&self) -> &MoveBudget {
        &self.budget
    }

    pub fn run<T: TranscriptLike + ?Sized>(&self, out: &mut T) -> Result<()> {
        tracing::debug!(budget = ?self.budget, "starting challenge");

        out.blank()?;
        out.line(BANNER_RULE)?;
        out.line(BANNER_TITLE)?;
        out.line(BANNER_RULE)?;

        for level in Level::ALL {
            level.run(out, &self.budget)?;
        }

        out.separator(CLOSING_TITLE)
    }
}

impl Default for Challenge {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::config::MAX_MOVES;
    use crate::error::Error;
    use crate::transcript::MoveLog;

    #[test]
    fn standard_token_total() {
        let mut log = MoveLog::new();
        Challenge::standard().run(&mut log).unwrap();
        // beginner 10+5+8, adventurer 4, master 10+5+8+3
        assert_eq!(log.steps.len(), 53);
    }

    #[test]
    fn new_rejects_oversized_budget() {
        let budget = MoveBudget::STANDARD.with_queen(MAX_MOVES + 1);
        assert!(matches!(
            Challenge::new(budget),
            Err(Error::MoveBudget { count, .. }) if count == MAX_MOVES + 1
        ));
    }
}
