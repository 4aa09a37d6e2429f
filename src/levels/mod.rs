//! The three demonstration levels, printed in [`Level::ALL`] order.
//!
//! - [`beginner`]: one piece per classic loop form (counted, pre-checked, post-checked).
//! - [`adventurer`]: the knight's L with an inner loop nested in an outer one.
//! - [`master`]: recursive emitters, then the knight loop with skip and early exit.

pub mod adventurer;
pub mod beginner;
pub mod master;

use std::fmt;

use crate::chess::config::MoveBudget;
use crate::error::Result;
use crate::transcript::TranscriptLike;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Beginner,
    Adventurer,
    Master,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Adventurer, Level::Master];

    /// Section title printed in the level's separator.
    pub fn title(self) -> &'static str {
        match self {
            Level::Beginner => "NIVEL NOVATO",
            Level::Adventurer => "NIVEL AVENTUREIRO",
            Level::Master => "NIVEL MESTRE",
        }
    }

    /// Print the level's separator followed by its movements.
    pub fn run<T: TranscriptLike + ?Sized>(self, out: &mut T, budget: &MoveBudget) -> Result<()> {
        let _span = tracing::debug_span!("level", title = self.title()).entered();
        tracing::debug!("running level");
        out.separator(self.title())?;
        match self {
            Level::Beginner => beginner::run(out, budget),
            Level::Adventurer => adventurer::run(out, budget),
            Level::Master => master::run(out, budget),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// "1 casa", "5 casas".
pub(crate) fn squares(n: u32) -> String {
    if n == 1 {
        "1 casa".to_string()
    } else {
        format!("{n} casas")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_counts_pluralize() {
        assert_eq!(squares(1), "1 casa");
        assert_eq!(squares(0), "0 casas");
        assert_eq!(squares(8), "8 casas");
    }

    #[test]
    fn levels_run_in_fixed_order() {
        let titles: Vec<_> = Level::ALL.iter().map(|l| l.to_string()).collect();
        assert_eq!(titles, ["NIVEL NOVATO", "NIVEL AVENTUREIRO", "NIVEL MESTRE"]);
    }
}
