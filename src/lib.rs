//! MateCheck: prints chess-piece movements as direction tokens using loops, nested loops and
//! recursion.

pub mod coord;
pub mod chess;
pub mod error;
pub mod transcript;
pub mod recursive;
pub mod levels;
pub mod challenge;

pub use challenge::Challenge;
pub use error::{Error, Result};
