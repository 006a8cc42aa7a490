//! Board structure with occupancy tracking

use thiserror::Error;

use super::{Pos, Stone, DEFAULT_BOARD_SIZE};

/// Errors from placing a stone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaceError {
    #[error("cell {0} is already occupied")]
    Occupied(Pos),
    #[error("position {0} is outside the board")]
    OutOfBounds(Pos),
}

/// Game board with a filled-cell count
///
/// Cells are stored row-major. `filled` equals the number of non-Empty cells
/// at all times; `place` is the sole mutator and never decrements it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Stone>,
    filled: usize,
}

impl Board {
    /// Create an empty board of the default size
    pub fn new() -> Self {
        Self::with_size(DEFAULT_BOARD_SIZE)
    }

    /// Create an empty board of the given size
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            cells: vec![Stone::Empty; size * size],
            filled: 0,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if position is on the board
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        (pos.row as usize) < self.size && (pos.col as usize) < self.size
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        pos.row as usize * self.size + pos.col as usize
    }

    /// Get stone at position
    ///
    /// The position must be on the board; callers that take untrusted
    /// coordinates go through [`contains`](Self::contains) first.
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[self.index(pos)]
    }

    /// Check if position is on the board and unoccupied
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.contains(pos) && self.get(pos) == Stone::Empty
    }

    /// Place a stone
    ///
    /// The only way the board mutates. Rejects off-board and occupied
    /// targets without touching any state.
    pub fn place(&mut self, pos: Pos, stone: Stone) -> Result<(), PlaceError> {
        debug_assert!(stone != Stone::Empty, "placing Empty is not a move");

        if !self.contains(pos) {
            return Err(PlaceError::OutOfBounds(pos));
        }
        let idx = self.index(pos);
        if self.cells[idx] != Stone::Empty {
            return Err(PlaceError::Occupied(pos));
        }

        self.cells[idx] = stone;
        self.filled += 1;
        Ok(())
    }

    /// Number of occupied cells
    #[inline]
    pub fn filled(&self) -> usize {
        self.filled
    }

    /// Check if every cell is occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.filled >= self.size * self.size
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
