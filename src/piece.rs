//! Piece definitions: orientation, footprint and damage tracking.

use core::fmt;

/// Orientation of a piece on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Cell `offset` steps from `(row, col)` along this orientation.
    #[inline]
    pub fn step(&self, row: usize, col: usize, offset: usize) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (row, col + offset),
            Orientation::Vertical => (row + offset, col),
        }
    }
}

/// A placed piece with its accumulated hits.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    row: usize,
    col: usize,
    length: usize,
    orientation: Orientation,
    hits: usize,
}

impl Piece {
    /// A fresh, undamaged piece. Callers are responsible for bounds;
    /// `Board::place` checks them before constructing one.
    pub fn new(row: usize, col: usize, length: usize, orientation: Orientation) -> Self {
        Self {
            row,
            col,
            length,
            orientation,
            hits: 0,
        }
    }

    /// Origin of the piece (row, col).
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Check if the piece is destroyed (every cell hit).
    pub fn is_sunk(&self) -> bool {
        self.hits == self.length
    }

    /// Cells covered by the piece, from the origin outward.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.length).map(move |i| self.orientation.step(self.row, self.col, i))
    }

    /// `true` if `(row, col)` lies in the footprint.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        match self.orientation {
            Orientation::Horizontal => {
                row == self.row && col >= self.col && col < self.col + self.length
            }
            Orientation::Vertical => {
                col == self.col && row >= self.row && row < self.row + self.length
            }
        }
    }

    /// Record one more hit. Saturates at the piece length.
    pub(crate) fn register_hit(&mut self) {
        if self.hits < self.length {
            self.hits += 1;
        }
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Piece {{ origin: ({}, {}), length: {}, orientation: {:?}, hits: {} }}",
            self.row, self.col, self.length, self.orientation, self.hits,
        )
    }
}
