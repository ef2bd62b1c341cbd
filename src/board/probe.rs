//! Scoped speculative placement
//!
//! A [`Probe`] writes a mark into a cell and puts the previous value back when
//! it is dropped, so a speculative placement cannot outlive the scope that made
//! it, even if that scope unwinds.

use std::ops::{Deref, DerefMut};

use super::{Board, Mark, Pos};

/// Guard over a board with one cell temporarily overwritten
pub struct Probe<'a> {
    board: &'a mut Board,
    pos: Pos,
    prior: Mark,
}

impl<'a> Probe<'a> {
    /// Place `mark` at `pos` until the guard is dropped
    pub fn place(board: &'a mut Board, pos: Pos, mark: Mark) -> Self {
        let prior = board.get(pos);
        board.set(pos, mark);
        Self { board, pos, prior }
    }

    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl Deref for Probe<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

// Nested probes need `&mut Board` through the guard.
impl DerefMut for Probe<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        self.board.set(self.pos, self.prior);
    }
}
