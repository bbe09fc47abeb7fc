//! Commonly used types and utilities for ease of import.

pub use crate::{AttackResult, Board, Cell, Game, GameConfig, GameStatus, Orientation, Piece, Randomizer};

#[cfg(feature = "std")]
pub use crate::{init_logging, play, render_board};
