//! Board structure

use super::bitboard::Bitboard;
use super::{Mark, Pos};

/// Game board: one bitboard per symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// X stones bitboard
    pub x: Bitboard,
    /// O stones bitboard
    pub o: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            x: Bitboard::new(),
            o: Bitboard::new(),
        }
    }

    /// Get mark at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Mark {
        if self.x.get(pos) {
            Mark::X
        } else if self.o.get(pos) {
            Mark::O
        } else {
            Mark::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.x.get(pos) && !self.o.get(pos)
    }

    /// Write `mark` at `pos`, replacing whatever was there.
    /// `Mark::Empty` clears the cell.
    #[inline]
    pub fn set(&mut self, pos: Pos, mark: Mark) {
        self.remove_stone(pos);
        self.place_stone(pos, mark);
    }

    /// Place a stone (no occupancy check)
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, mark: Mark) {
        match mark {
            Mark::X => self.x.set(pos),
            Mark::O => self.o.set(pos),
            Mark::Empty => {}
        }
    }

    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.x.clear(pos);
        self.o.clear(pos);
    }

    /// Empty cells in row-major order
    #[inline]
    pub fn empty_positions(&self) -> impl Iterator<Item = Pos> {
        self.x.union(self.o).complement().iter_ones()
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.x.count() + self.o.count()
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.x.is_empty() && self.o.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.x.union(self.o) == Bitboard::full()
    }

    /// Clear every cell
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
