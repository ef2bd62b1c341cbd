//! Win condition checking
//!
//! A game is won by five identical marks in a row: horizontally, vertically or
//! on either diagonal. The scan is a pure function of the board, so it is safe
//! to run after any speculative placement.

use crate::board::{Board, Mark, Pos, WIN_LENGTH};

/// Direction vectors for line checking (4 directions)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (-1, 1), // Diagonal NE
];

/// Check whether any five-in-a-row exists on the board.
///
/// Does not say which mark won; callers know who just moved.
#[inline]
pub fn check_win(board: &Board) -> bool {
    find_five_line(board).is_some()
}

/// Find the first five-in-a-row in row-major scan order.
///
/// For each occupied cell, the four directions are tried in order
/// (→, ↓, ↘, ↗) and the first run of [`WIN_LENGTH`] cells starting at that
/// cell is returned. Runs that would leave the board are skipped.
pub fn find_five_line(board: &Board) -> Option<[Pos; WIN_LENGTH]> {
    for start in Pos::all() {
        let mark = board.get(start);
        if mark == Mark::Empty {
            continue;
        }
        for &(dr, dc) in &DIRECTIONS {
            if let Some(line) = run_from(board, start, mark, dr, dc) {
                return Some(line);
            }
        }
    }
    None
}

/// Five cells from `start` along (dr, dc) if all hold `mark`
fn run_from(board: &Board, start: Pos, mark: Mark, dr: i32, dc: i32) -> Option<[Pos; WIN_LENGTH]> {
    let mut line = [start; WIN_LENGTH];
    for (i, slot) in line.iter_mut().enumerate().skip(1) {
        let pos = Pos::try_new(start.row as i32 + dr * i as i32, start.col as i32 + dc * i as i32)?;
        if board.get(pos) != mark {
            return None;
        }
        *slot = pos;
    }
    Some(line)
}
