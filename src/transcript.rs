//! Output seam for everything the demo prints.
//!
//! Every routine writes through [`TranscriptLike`], so the same level code drives the real
//! stdout transcript ([`Transcript`]) and the in-memory move recorder used by tests
//! ([`MoveLog`]).

use std::io::Write;

use crate::chess::direction::Direction;
use crate::coord::Coord;
use crate::error::Result;

/// Sink for transcript lines and move tokens.
pub trait TranscriptLike {
    /// Write one line of free text (headings, banner, blank lines).
    fn line(&mut self, text: &str) -> Result<()>;

    /// Write one move token.
    fn step(&mut self, dir: Direction) -> Result<()> {
        self.line(dir.token())
    }

    fn blank(&mut self) -> Result<()> {
        self.line("")
    }

    /// Section header: blank line, `========== title ==========`, blank line.
    fn separator(&mut self, title: &str) -> Result<()> {
        self.blank()?;
        self.line(&format!("========== {title} =========="))?;
        self.blank()
    }
}

/// Line-oriented transcript over any writer.
#[derive(Debug)]
pub struct Transcript<W: Write> {
    out: W,
    steps: usize,
}

impl<W: Write> Transcript<W> {
    pub fn new(out: W) -> Self {
        Self { out, steps: 0 }
    }

    /// Move tokens written so far.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TranscriptLike for Transcript<W> {
    fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    fn step(&mut self, dir: Direction) -> Result<()> {
        tracing::trace!(token = dir.token(), "step");
        self.line(dir.token())?;
        self.steps += 1;
        Ok(())
    }
}

/// Records move tokens and drops all other text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveLog {
    pub steps: Vec<Direction>,
}

impl MoveLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Net displacement of all recorded tokens.
    pub fn displacement(&self) -> Coord {
        self.steps
            .iter()
            .fold(Coord::ORIGIN, |acc, dir| acc + dir.delta())
    }
}

impl TranscriptLike for MoveLog {
    fn line(&mut self, _text: &str) -> Result<()> {
        Ok(())
    }

    fn step(&mut self, dir: Direction) -> Result<()> {
        self.steps.push(dir);
        Ok(())
    }
}
