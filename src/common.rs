//! Common types: attack outcomes, game status and setup errors.

use crate::piece::Orientation;

/// Outcome of a single attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackResult {
    /// Coordinates fall outside the board.
    Invalid,
    /// The cell was already attacked earlier.
    AlreadyAttacked,
    /// No piece at the cell.
    Miss,
    /// Struck a piece that is still afloat.
    Hit,
    /// Struck the last intact cell of a piece.
    HitAndSunk,
}

impl AttackResult {
    /// `true` for outcomes that consumed a turn.
    pub fn counted(&self) -> bool {
        matches!(
            self,
            AttackResult::Miss | AttackResult::Hit | AttackResult::HitAndSunk
        )
    }
}

impl core::fmt::Display for AttackResult {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AttackResult::Invalid => write!(f, "Invalid attack coordinates"),
            AttackResult::AlreadyAttacked => write!(f, "You've already attacked this location"),
            AttackResult::Miss => write!(f, "Miss!"),
            AttackResult::Hit => write!(f, "Hit!"),
            AttackResult::HitAndSunk => write!(f, "Hit! You sunk my ship!"),
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
}

/// Errors raised while setting up a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Board size of zero.
    EmptyBoard,
    /// Board cell count does not fit in `usize`.
    BoardTooLarge { size: usize },
    /// A requested piece has length zero.
    ZeroLengthPiece { piece: usize },
    /// Random placement gave up after the configured number of draws.
    PlacementExhausted {
        piece: usize,
        length: usize,
        attempts: usize,
    },
    /// Explicit placement is out of bounds or overlaps another piece.
    InvalidPlacement {
        row: usize,
        col: usize,
        length: usize,
        orientation: Orientation,
    },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::EmptyBoard => write!(f, "Board size must be at least 1"),
            ConfigError::BoardTooLarge { size } => {
                write!(f, "Board size {} is too large", size)
            }
            ConfigError::ZeroLengthPiece { piece } => {
                write!(f, "Piece {} has length 0", piece)
            }
            ConfigError::PlacementExhausted {
                piece,
                length,
                attempts,
            } => write!(
                f,
                "Unable to place piece {} (length {}) after {} attempts",
                piece, length, attempts
            ),
            ConfigError::InvalidPlacement {
                row,
                col,
                length,
                orientation,
            } => write!(
                f,
                "Piece of length {} at ({}, {}) {:?} is out of bounds or overlaps",
                length, row, col, orientation
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
