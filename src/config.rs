//! Game configuration: board size, fleet layout and placement retry cap.

use alloc::vec::Vec;

use crate::common::ConfigError;

pub const BOARD_SIZE: usize = 10;
pub const NUM_PIECES: usize = 5;
pub const PIECE_LENGTHS: [usize; NUM_PIECES] = [5, 4, 3, 3, 2];

/// Random draws allowed per piece before setup gives up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Parameters fixed at game creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: usize,
    pub piece_lengths: Vec<usize>,
    pub max_placement_attempts: usize,
}

impl GameConfig {
    pub fn new(board_size: usize, piece_lengths: Vec<usize>) -> Self {
        Self {
            board_size,
            piece_lengths,
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }

    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    pub fn with_piece_lengths(mut self, piece_lengths: Vec<usize>) -> Self {
        self.piece_lengths = piece_lengths;
        self
    }

    pub fn with_max_placement_attempts(mut self, attempts: usize) -> Self {
        self.max_placement_attempts = attempts;
        self
    }

    /// Total number of cells the fleet occupies.
    pub fn total_piece_cells(&self) -> usize {
        self.piece_lengths
            .iter()
            .fold(0usize, |acc, &len| acc.saturating_add(len))
    }

    /// Reject configurations that are malformed regardless of luck.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        if self.board_size.checked_mul(self.board_size).is_none() {
            return Err(ConfigError::BoardTooLarge {
                size: self.board_size,
            });
        }
        if let Some(piece) = self.piece_lengths.iter().position(|&len| len == 0) {
            return Err(ConfigError::ZeroLengthPiece { piece });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(BOARD_SIZE, PIECE_LENGTHS.to_vec())
    }
}
