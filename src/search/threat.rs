//! Threat scanning
//!
//! A threat is an empty cell where placing a mark would complete five in a
//! row. Every candidate is tested with a [`Probe`]: the mark is written, the
//! win scan runs, and the cell is restored when the probe drops. The board is
//! therefore identical before and after every call here, whatever the result.
//!
//! The run-length argument (`_consecutive_count`) names the run length the caller is
//! interested in, but the probe always tests full five-in-a-row completion.
//! Callers asking for 3 or 4 get exactly the same answer as for 5.

use crate::board::{Board, Mark, Pos, Probe};
use crate::rules::check_win;

/// Would placing `mark` at `pos` complete five in a row?
#[inline]
pub fn completes_five(board: &mut Board, pos: Pos, mark: Mark) -> bool {
    let probe = Probe::place(board, pos, mark);
    check_win(&probe)
}

/// All empty cells (row-major) where `mark` would complete five in a row.
pub fn find_potential_threats(board: &mut Board, mark: Mark, _consecutive_count: usize) -> Vec<Pos> {
    let candidates: Vec<Pos> = board.empty_positions().collect();
    candidates
        .into_iter()
        .filter(|&pos| completes_five(board, pos, mark))
        .collect()
}

/// First empty cell (row-major) where `mark` would complete five in a row.
pub fn find_move(board: &mut Board, mark: Mark, _consecutive_count: usize) -> Option<Pos> {
    let candidates: Vec<Pos> = board.empty_positions().collect();
    candidates
        .into_iter()
        .find(|&pos| completes_five(board, pos, mark))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_of(board: &mut Board, row: u8, cols: &[u8], mark: Mark) {
        for &c in cols {
            board.place_stone(Pos::new(row, c), mark);
        }
    }

    #[test]
    fn test_no_threats_on_empty_board() {
        let mut board = Board::new();
        assert!(find_potential_threats(&mut board, Mark::X, 5).is_empty());
        assert_eq!(find_move(&mut board, Mark::O, 5), None);
        assert!(board.is_board_empty());
    }

    #[test]
    fn test_open_four_has_two_threats() {
        let mut board = Board::new();
        row_of(&mut board, 2, &[2, 3, 4, 5], Mark::O);

        let threats = find_potential_threats(&mut board, Mark::O, 5);
        assert_eq!(threats, vec![Pos::new(2, 1), Pos::new(2, 6)]);
        assert_eq!(find_move(&mut board, Mark::O, 5), Some(Pos::new(2, 1)));
    }

    #[test]
    fn test_threats_are_per_mark() {
        let mut board = Board::new();
        row_of(&mut board, 0, &[0, 1, 2, 3], Mark::X);

        assert_eq!(find_move(&mut board, Mark::X, 5), Some(Pos::new(0, 4)));
        assert_eq!(find_move(&mut board, Mark::O, 5), None);
    }

    #[test]
    fn test_gapped_four_threat() {
        let mut board = Board::new();
        row_of(&mut board, 7, &[1, 2, 4, 5], Mark::X);
        assert_eq!(find_potential_threats(&mut board, Mark::X, 5), vec![Pos::new(7, 3)]);
    }

    #[test]
    fn test_consecutive_count_is_ignored() {
        let mut board = Board::new();
        row_of(&mut board, 4, &[3, 4, 5], Mark::X);

        // A three is not a threat, whatever the nominal run length
        for count in [3, 4, 5] {
            assert!(find_potential_threats(&mut board, Mark::X, count).is_empty());
        }

        board.place_stone(Pos::new(4, 6), Mark::X);
        let expected = find_potential_threats(&mut board, Mark::X, 5);
        assert_eq!(find_potential_threats(&mut board, Mark::X, 3), expected);
        assert_eq!(find_potential_threats(&mut board, Mark::X, 4), expected);
    }

    #[test]
    fn test_scans_leave_board_untouched() {
        let mut board = Board::new();
        row_of(&mut board, 1, &[0, 1, 2, 3], Mark::X);
        row_of(&mut board, 6, &[5, 6, 7], Mark::O);
        board.place_stone(Pos::new(9, 9), Mark::O);
        let before = board.clone();

        let _ = find_potential_threats(&mut board, Mark::X, 3);
        assert_eq!(board, before);
        let _ = find_potential_threats(&mut board, Mark::O, 4);
        assert_eq!(board, before);
        let _ = find_move(&mut board, Mark::X, 5);
        assert_eq!(board, before);
        let _ = find_move(&mut board, Mark::O, 5);
        assert_eq!(board, before);
    }

    #[test]
    fn test_completes_five_does_not_mutate() {
        let mut board = Board::new();
        row_of(&mut board, 9, &[0, 1, 2, 3], Mark::O);
        assert!(completes_five(&mut board, Pos::new(9, 4), Mark::O));
        assert!(board.is_empty(Pos::new(9, 4)));
        assert!(!completes_five(&mut board, Pos::new(9, 4), Mark::X));
    }
}
