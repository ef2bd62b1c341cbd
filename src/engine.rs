//! Scripted bot opponent
//!
//! The bot has no lookahead. Each turn it walks a fixed priority list and
//! plays the first rule that yields a cell:
//!
//! 1. **Immediate win**: complete its own five
//! 2. **Block**: occupy the cell where the opponent would complete five
//! 3. **Deny threat**: first cell flagged by the opponent threat scan
//! 4. **Own threat**: first cell flagged by its own threat scan
//! 5. **Defensive**: first cell where an opponent stone would leave the
//!    opponent a winning follow-up
//! 6. **Random**: uniform pick among the empty cells
//!
//! Rules 3 and 4 run the threat scan with a nominal run length of 3, and
//! rule 5 with 4. The scan always tests full five completion, so on a board
//! where rules 1 and 2 found nothing, rules 3 and 4 never fire. They are
//! kept so the decision order stays as written.
//!
//! # Example
//!
//! ```
//! use gomoku::{BotEngine, Board, Mark, MoveKind, Pos};
//!
//! let mut board = Board::new();
//! for col in 2..6 {
//!     board.place_stone(Pos::new(2, col), Mark::O);
//! }
//!
//! let mut engine = BotEngine::with_seed(7);
//! let choice = engine.select_move(&board, Mark::O).unwrap();
//! assert_eq!(choice.pos, Pos::new(2, 1));
//! assert_eq!(choice.kind, MoveKind::ImmediateWin);
//! ```

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

use crate::board::{Board, Mark, Pos, Probe, WIN_LENGTH};
use crate::search::{find_move, find_potential_threats};

/// Nominal run length passed by the threat-denial rules
const THREAT_RUN: usize = 3;
/// Nominal run length passed by the defensive rule
const DEFENSIVE_RUN: usize = 4;

/// Which rule of the priority list produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// Completes the bot's own five
    ImmediateWin,
    /// Occupies the opponent's completing cell
    Block,
    /// First cell of the opponent threat scan
    DenyThreat,
    /// First cell of the bot's own threat scan
    OwnThreat,
    /// Pre-empts a cell that would give the opponent a winning follow-up
    Defensive,
    /// Uniform choice among empty cells
    Random,
}

impl MoveKind {
    /// Short label for display
    pub fn label(self) -> &'static str {
        match self {
            MoveKind::ImmediateWin => "winning move",
            MoveKind::Block => "block",
            MoveKind::DenyThreat => "deny threat",
            MoveKind::OwnThreat => "own threat",
            MoveKind::Defensive => "defensive",
            MoveKind::Random => "random",
        }
    }
}

/// A selected bot move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotMove {
    pub pos: Pos,
    pub kind: MoveKind,
}

impl BotMove {
    #[inline]
    fn new(pos: Pos, kind: MoveKind) -> Self {
        Self { pos, kind }
    }
}

/// Fixed-strategy bot.
///
/// Holds the random source used by the last-resort rule. Seeding it makes
/// the whole bot deterministic.
pub struct BotEngine {
    rng: StdRng,
    seed: u64,
}

impl BotEngine {
    /// Create a bot seeded from the thread RNG
    #[must_use]
    pub fn new() -> Self {
        let seed: u64 = rand::rng().random();
        Self::with_seed(seed)
    }

    /// Create a bot with a fixed seed
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Pick the bot's move for `bot` on `board`.
    ///
    /// The board is probed on a private copy and never modified. Returns
    /// `None` only when no empty cell remains.
    #[instrument(level = "debug", skip(self, board), fields(stones = board.stone_count()))]
    pub fn select_move(&mut self, board: &Board, bot: Mark) -> Option<BotMove> {
        let opponent = bot.opponent();
        let mut work_board = board.clone();

        let choice = Self::find_scripted_move(&mut work_board, bot, opponent)
            .or_else(|| self.random_move(&work_board));

        if let Some(choice) = choice {
            debug!(pos = %choice.pos, kind = ?choice.kind, "bot selected move");
        }
        choice
    }

    /// Rules 1-5, in order
    fn find_scripted_move(board: &mut Board, bot: Mark, opponent: Mark) -> Option<BotMove> {
        // 1. Win now
        if let Some(pos) = find_move(board, bot, WIN_LENGTH) {
            return Some(BotMove::new(pos, MoveKind::ImmediateWin));
        }

        // 2. Block the opponent's five
        if let Some(pos) = find_move(board, opponent, WIN_LENGTH) {
            return Some(BotMove::new(pos, MoveKind::Block));
        }

        // 3. Deny opponent threats
        if let Some(&pos) = find_potential_threats(board, opponent, THREAT_RUN).first() {
            return Some(BotMove::new(pos, MoveKind::DenyThreat));
        }

        // 4. Own threats
        if let Some(&pos) = find_potential_threats(board, bot, THREAT_RUN).first() {
            return Some(BotMove::new(pos, MoveKind::OwnThreat));
        }

        // 5. Defensive
        Self::find_defensive_move(board, opponent).map(|pos| BotMove::new(pos, MoveKind::Defensive))
    }

    /// First empty cell where an opponent stone would leave the opponent a
    /// completing follow-up.
    fn find_defensive_move(board: &mut Board, opponent: Mark) -> Option<Pos> {
        let candidates: Vec<Pos> = board.empty_positions().collect();
        candidates.into_iter().find(|&pos| {
            let mut probe = Probe::place(board, pos, opponent);
            !find_potential_threats(&mut probe, opponent, DEFENSIVE_RUN).is_empty()
        })
    }

    /// 6. Uniform choice over the empty cells
    fn random_move(&mut self, board: &Board) -> Option<BotMove> {
        let empties: Vec<Pos> = board.empty_positions().collect();
        empties
            .choose(&mut self.rng)
            .map(|&pos| BotMove::new(pos, MoveKind::Random))
    }
}

impl Default for BotEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_all(board: &mut Board, cells: &[(u8, u8)], mark: Mark) {
        for &(r, c) in cells {
            board.place_stone(Pos::new(r, c), mark);
        }
    }

    #[test]
    fn test_engine_finds_immediate_win() {
        let mut board = Board::new();
        place_all(&mut board, &[(2, 2), (2, 3), (2, 4), (2, 5)], Mark::O);
        place_all(&mut board, &[(5, 5), (6, 6), (7, 7)], Mark::X);

        let mut engine = BotEngine::with_seed(1);
        let result = engine.select_move(&board, Mark::O).unwrap();

        assert_eq!(result.pos, Pos::new(2, 1));
        assert_eq!(result.kind, MoveKind::ImmediateWin);
    }

    #[test]
    fn test_engine_prefers_win_over_block() {
        let mut board = Board::new();
        place_all(&mut board, &[(0, 0), (0, 1), (0, 2), (0, 3)], Mark::X);
        place_all(&mut board, &[(9, 5), (9, 6), (9, 7), (9, 8)], Mark::O);

        let mut engine = BotEngine::with_seed(1);
        let result = engine.select_move(&board, Mark::O).unwrap();

        assert_eq!(result.pos, Pos::new(9, 4));
        assert_eq!(result.kind, MoveKind::ImmediateWin);
    }

    #[test]
    fn test_engine_blocks_opponent_win() {
        let mut board = Board::new();
        place_all(&mut board, &[(0, 0), (0, 1), (0, 2), (0, 3)], Mark::X);
        board.place_stone(Pos::new(5, 5), Mark::O);

        let mut engine = BotEngine::with_seed(1);
        let result = engine.select_move(&board, Mark::O).unwrap();

        assert_eq!(result.pos, Pos::new(0, 4));
        assert_eq!(result.kind, MoveKind::Block);
    }

    #[test]
    fn test_engine_blocks_vertical_gap() {
        let mut board = Board::new();
        place_all(&mut board, &[(1, 6), (2, 6), (4, 6), (5, 6)], Mark::X);

        let mut engine = BotEngine::with_seed(1);
        let result = engine.select_move(&board, Mark::O).unwrap();

        assert_eq!(result.pos, Pos::new(3, 6));
        assert_eq!(result.kind, MoveKind::Block);
    }

    #[test]
    fn test_engine_defends_open_three() {
        let mut board = Board::new();
        place_all(&mut board, &[(5, 3), (5, 4), (5, 5)], Mark::X);

        let mut engine = BotEngine::with_seed(1);
        let result = engine.select_move(&board, Mark::O).unwrap();

        // X at (5,1) would make 1,3,4,5 with (5,2) completing the five;
        // nothing earlier in row-major order gives X a follow-up
        assert_eq!(result.pos, Pos::new(5, 1));
        assert_eq!(result.kind, MoveKind::Defensive);
    }

    #[test]
    fn test_engine_random_on_quiet_board() {
        let mut board = Board::new();
        board.place_stone(Pos::new(5, 5), Mark::X);

        let mut engine = BotEngine::with_seed(42);
        let result = engine.select_move(&board, Mark::O).unwrap();

        assert_eq!(result.kind, MoveKind::Random);
        assert!(board.is_empty(result.pos));
    }

    #[test]
    fn test_same_seed_same_random_move() {
        let mut board = Board::new();
        board.place_stone(Pos::new(0, 0), Mark::X);

        let first = BotEngine::with_seed(2024).select_move(&board, Mark::O);
        let second = BotEngine::with_seed(2024).select_move(&board, Mark::O);
        assert_eq!(first, second);
    }

    #[test]
    fn test_select_move_leaves_board_untouched() {
        let mut board = Board::new();
        place_all(&mut board, &[(5, 3), (5, 4), (5, 5)], Mark::X);
        place_all(&mut board, &[(0, 0), (1, 1)], Mark::O);
        let before = board.clone();

        let mut engine = BotEngine::with_seed(3);
        let _ = engine.select_move(&board, Mark::O);
        assert_eq!(board, before);
    }

    #[test]
    fn test_no_move_on_full_board() {
        let mut board = Board::new();
        for pos in Pos::all() {
            board.place_stone(pos, Mark::X);
        }
        let mut engine = BotEngine::with_seed(0);
        assert_eq!(engine.select_move(&board, Mark::O), None);
    }

    #[test]
    fn test_last_empty_cell_is_taken() {
        // Checkerboard by 2x1 blocks so neither side has five anywhere
        let mut board = Board::new();
        for pos in Pos::all() {
            let mark = if (pos.row / 2 + pos.col) % 2 == 0 { Mark::X } else { Mark::O };
            board.place_stone(pos, mark);
        }
        board.remove_stone(Pos::new(9, 9));

        let mut engine = BotEngine::with_seed(0);
        let result = engine.select_move(&board, Mark::O).unwrap();
        assert_eq!(result.pos, Pos::new(9, 9));
    }

    #[test]
    fn test_seed_is_reported() {
        assert_eq!(BotEngine::with_seed(99).seed(), 99);
    }
}
