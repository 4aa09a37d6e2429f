//! Pieces, move tokens and the per-piece move table.

pub mod config;
pub mod direction;
pub mod piece;
