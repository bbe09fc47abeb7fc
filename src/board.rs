//! Board state: cell grid, placement validation and random fleet setup.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::ConfigError;
use crate::config::GameConfig;
use crate::piece::{Orientation, Piece};
use crate::rng::Randomizer;

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    Empty,
    /// Unrevealed segment of the piece at this index.
    Piece(usize),
    Miss,
    Hit,
}

impl Cell {
    /// Display symbol. Piece segments only show in the owner view.
    pub fn symbol(&self, reveal: bool) -> char {
        match self {
            Cell::Empty => '_',
            Cell::Piece(_) if reveal => 'S',
            Cell::Piece(_) => '_',
            Cell::Miss => 'x',
            Cell::Hit => '+',
        }
    }
}

/// Square grid of cells, stored row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty `size`×`size` board.
    pub fn new(size: usize) -> Self {
        Board {
            size,
            cells: vec![Cell::Empty; size.saturating_mul(size)],
        }
    }

    /// Fallible constructor: rejects sizes whose cell count overflows `usize`.
    pub fn try_new(size: usize) -> Result<Self, ConfigError> {
        if size.checked_mul(size).is_none() {
            return Err(ConfigError::BoardTooLarge { size });
        }
        Ok(Self::new(size))
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at (row, col), or `None` off the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        // chunks(0) panics; an empty board simply has no rows
        self.cells.chunks(self.size.max(1))
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Whether a piece of `length` fits at (row, col) without leaving the
    /// board or touching an occupied cell.
    pub fn can_place(
        &self,
        row: usize,
        col: usize,
        length: usize,
        orientation: Orientation,
    ) -> bool {
        if length == 0 || row >= self.size || col >= self.size {
            return false;
        }
        let along = match orientation {
            Orientation::Horizontal => col,
            Orientation::Vertical => row,
        };
        // along < size was checked above
        if length > self.size - along {
            return false;
        }
        (0..length).all(|i| {
            let (r, c) = orientation.step(row, col, i);
            self.cell(r, c) == Some(Cell::Empty)
        })
    }

    /// Place a piece explicitly, tagging its footprint with `piece_index`.
    pub fn place(
        &mut self,
        piece_index: usize,
        row: usize,
        col: usize,
        length: usize,
        orientation: Orientation,
    ) -> Result<Piece, ConfigError> {
        if !self.can_place(row, col, length, orientation) {
            return Err(ConfigError::InvalidPlacement {
                row,
                col,
                length,
                orientation,
            });
        }
        let piece = Piece::new(row, col, length, orientation);
        for (r, c) in piece.cells() {
            self.set(r, c, Cell::Piece(piece_index));
        }
        Ok(piece)
    }

    /// Draws a random non-overlapping (row, col, Orientation) for a piece of
    /// `length`, giving up after `max_attempts` rejected draws.
    pub fn random_placement<R: Randomizer + ?Sized>(
        &self,
        rng: &mut R,
        piece_index: usize,
        length: usize,
        max_attempts: usize,
    ) -> Result<(usize, usize, Orientation), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        for _ in 0..max_attempts {
            let row = rng.uniform_int(self.size);
            let col = rng.uniform_int(self.size);
            let orientation = rng.random_orientation();
            if self.can_place(row, col, length, orientation) {
                return Ok((row, col, orientation));
            }
        }
        log::debug!(
            "gave up placing piece {} (length {}) after {} draws",
            piece_index,
            length,
            max_attempts
        );
        Err(ConfigError::PlacementExhausted {
            piece: piece_index,
            length,
            attempts: max_attempts,
        })
    }

    /// Build a board with every piece of `config` placed at random, in order.
    pub fn random_fleet<R: Randomizer + ?Sized>(
        config: &GameConfig,
        rng: &mut R,
    ) -> Result<(Board, Vec<Piece>), ConfigError> {
        config.validate()?;
        let mut board = Board::try_new(config.board_size)?;
        let mut pieces = Vec::with_capacity(config.piece_lengths.len());
        for (i, &length) in config.piece_lengths.iter().enumerate() {
            let (r, c, o) =
                board.random_placement(rng, i, length, config.max_placement_attempts)?;
            pieces.push(board.place(i, r, c, length, o)?);
            log::debug!("placed piece {} (length {}) at ({}, {}) {:?}", i, length, r, c, o);
        }
        Ok((board, pieces))
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, state: Cell) {
        if let Some(i) = self.index(row, col) {
            self.cells[i] = state;
        }
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.size && col < self.size {
            Some(row * self.size + col)
        } else {
            None
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board<{}>:", self.size)?;
        for row in self.rows() {
            for cell in row {
                write!(f, "{}", cell.symbol(true))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::VecDeque;

    /// Replays a fixed sequence of draws.
    struct Scripted {
        ints: VecDeque<usize>,
        orientations: VecDeque<Orientation>,
    }

    impl Randomizer for Scripted {
        fn uniform_int(&mut self, n: usize) -> usize {
            self.ints.pop_front().unwrap_or(0) % n
        }

        fn random_orientation(&mut self) -> Orientation {
            self.orientations
                .pop_front()
                .unwrap_or(Orientation::Horizontal)
        }
    }

    #[test]
    fn can_place_checks_bounds_and_overlap() {
        let mut board = Board::new(5);
        assert!(board.can_place(0, 0, 5, Orientation::Horizontal));
        assert!(!board.can_place(0, 1, 5, Orientation::Horizontal));
        assert!(board.can_place(0, 4, 5, Orientation::Vertical));
        assert!(!board.can_place(1, 4, 5, Orientation::Vertical));
        assert!(!board.can_place(5, 0, 1, Orientation::Horizontal));
        assert!(!board.can_place(0, 0, 0, Orientation::Horizontal));

        board.place(0, 2, 0, 3, Orientation::Horizontal).unwrap();
        assert!(!board.can_place(0, 1, 4, Orientation::Vertical));
        assert!(board.can_place(0, 3, 4, Orientation::Vertical));
    }

    #[test]
    fn place_marks_footprint_with_index() {
        let mut board = Board::new(4);
        let piece = board.place(3, 1, 1, 2, Orientation::Vertical).unwrap();
        assert_eq!(piece.origin(), (1, 1));
        assert_eq!(board.cell(1, 1), Some(Cell::Piece(3)));
        assert_eq!(board.cell(2, 1), Some(Cell::Piece(3)));
        assert_eq!(board.count(Cell::Empty), 14);
        assert!(matches!(
            board.place(0, 0, 1, 3, Orientation::Vertical),
            Err(ConfigError::InvalidPlacement { .. })
        ));
    }

    #[test]
    fn random_placement_retries_until_accepted() {
        let mut board = Board::new(4);
        board.place(0, 0, 0, 4, Orientation::Horizontal).unwrap();
        // first draw lands on the occupied row, second draw fits
        let mut rng = Scripted {
            ints: VecDeque::from([0, 1, 2, 0]),
            orientations: VecDeque::from([Orientation::Horizontal, Orientation::Horizontal]),
        };
        let placement = board.random_placement(&mut rng, 1, 3, 10).unwrap();
        assert_eq!(placement, (2, 0, Orientation::Horizontal));
    }

    #[test]
    fn can_place_rejects_oversized_length() {
        let board = Board::new(5);
        assert!(!board.can_place(0, 1, usize::MAX, Orientation::Horizontal));
        assert!(!board.can_place(4, 0, usize::MAX, Orientation::Vertical));
        assert!(!board.can_place(0, 0, 6, Orientation::Horizontal));
    }

    #[test]
    fn random_placement_on_empty_board_is_an_error() {
        let board = Board::new(0);
        let mut rng = Scripted {
            ints: VecDeque::new(),
            orientations: VecDeque::new(),
        };
        assert_eq!(
            board.random_placement(&mut rng, 0, 1, 5),
            Err(ConfigError::EmptyBoard)
        );
    }

    #[test]
    fn try_new_rejects_overflowing_size() {
        assert_eq!(
            Board::try_new(usize::MAX),
            Err(ConfigError::BoardTooLarge { size: usize::MAX })
        );
        assert_eq!(Board::try_new(3).map(|b| b.size()), Ok(3));
    }

    #[test]
    fn random_placement_gives_up_at_cap() {
        let board = Board::new(2);
        let mut rng = Scripted {
            ints: VecDeque::new(),
            orientations: VecDeque::new(),
        };
        assert_eq!(
            board.random_placement(&mut rng, 0, 3, 25),
            Err(ConfigError::PlacementExhausted {
                piece: 0,
                length: 3,
                attempts: 25
            })
        );
    }
}
