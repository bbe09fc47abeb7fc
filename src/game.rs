//! Game state: owns the board, the fleet and the shot log, and resolves attacks.

use alloc::vec::Vec;

use crate::{
    board::{Board, Cell},
    common::{AttackResult, ConfigError, GameStatus},
    config::GameConfig,
    piece::{Orientation, Piece},
    rng::Randomizer,
};

/// Serializable end-of-game (or mid-game) report.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSummary {
    pub board_size: usize,
    pub pieces: Vec<Piece>,
    pub attempts: usize,
    pub hits: usize,
    pub status: GameStatus,
}

/// Core game logic holding the board, the fleet and the shot log.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    pieces: Vec<Piece>,
    shots: Vec<bool>,
    attempts: usize,
    hits: usize,
}

impl Game {
    /// Create a game with the fleet of `config` placed at random.
    pub fn new<R: Randomizer + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Self, ConfigError> {
        let (board, pieces) = Board::random_fleet(config, rng)?;
        log::info!(
            "new game: {}x{} board, {} pieces",
            config.board_size,
            config.board_size,
            pieces.len()
        );
        Ok(Self::from_parts(board, pieces))
    }

    /// Create a game from explicit `(row, col, length, orientation)` placements.
    pub fn from_layout(
        board_size: usize,
        layout: &[(usize, usize, usize, Orientation)],
    ) -> Result<Self, ConfigError> {
        if board_size == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        let mut board = Board::try_new(board_size)?;
        let mut pieces = Vec::with_capacity(layout.len());
        for (i, &(row, col, length, orientation)) in layout.iter().enumerate() {
            if length == 0 {
                return Err(ConfigError::ZeroLengthPiece { piece: i });
            }
            pieces.push(board.place(i, row, col, length, orientation)?);
        }
        Ok(Self::from_parts(board, pieces))
    }

    fn from_parts(board: Board, pieces: Vec<Piece>) -> Self {
        let size = board.size();
        Self {
            board,
            pieces,
            shots: alloc::vec![false; size * size],
            attempts: 0,
            hits: 0,
        }
    }

    /// Read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Pieces in placement order.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Valid, non-duplicate attacks made so far.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Attacks that struck a piece.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Pieces not yet sunk.
    pub fn remaining(&self) -> usize {
        self.pieces.iter().filter(|p| !p.is_sunk()).count()
    }

    /// Whether (row, col) has been attacked. `false` off the board.
    pub fn has_shot(&self, row: usize, col: usize) -> bool {
        self.shot_index(row, col)
            .map(|i| self.shots[i])
            .unwrap_or(false)
    }

    /// Fire at (row, col).
    pub fn attack(&mut self, row: isize, col: isize) -> AttackResult {
        let (row, col) = match (usize::try_from(row), usize::try_from(col)) {
            (Ok(r), Ok(c)) if r < self.board.size() && c < self.board.size() => (r, c),
            _ => {
                log::trace!("attack ({}, {}) off the board", row, col);
                return AttackResult::Invalid;
            }
        };
        let idx = row * self.board.size() + col;
        if self.shots[idx] {
            log::trace!("attack ({}, {}) repeated", row, col);
            return AttackResult::AlreadyAttacked;
        }
        self.shots[idx] = true;
        self.attempts += 1;

        let result = match self.board.cell(row, col) {
            Some(Cell::Piece(_)) => self.strike(row, col),
            _ => {
                self.board.set(row, col, Cell::Miss);
                AttackResult::Miss
            }
        };
        log::trace!("attack ({}, {}) -> {:?}", row, col, result);
        if result == AttackResult::HitAndSunk && self.is_over() {
            log::info!("all pieces sunk after {} attempts", self.attempts);
        }
        result
    }

    fn strike(&mut self, row: usize, col: usize) -> AttackResult {
        // footprints never overlap, so the first match is the owner
        let Some(piece) = self.pieces.iter_mut().find(|p| p.contains(row, col)) else {
            self.board.set(row, col, Cell::Miss);
            return AttackResult::Miss;
        };
        piece.register_hit();
        self.hits += 1;
        if piece.is_sunk() {
            let piece = *piece;
            for (r, c) in piece.cells() {
                self.board.set(r, c, Cell::Hit);
            }
            AttackResult::HitAndSunk
        } else {
            self.board.set(row, col, Cell::Hit);
            AttackResult::Hit
        }
    }

    /// `true` once every piece is sunk.
    pub fn is_over(&self) -> bool {
        self.pieces.iter().all(|p| p.is_sunk())
    }

    pub fn status(&self) -> GameStatus {
        if self.is_over() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    /// Snapshot of the counters and fleet.
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            board_size: self.board.size(),
            pieces: self.pieces.clone(),
            attempts: self.attempts,
            hits: self.hits,
            status: self.status(),
        }
    }

    #[inline]
    fn shot_index(&self, row: usize, col: usize) -> Option<usize> {
        let size = self.board.size();
        (row < size && col < size).then(|| row * size + col)
    }
}
