//! Game session state and move application

use crate::board::{Board, Mark, Pos, WIN_LENGTH};
use crate::rules::find_five_line;

use super::error::MoveError;
use super::events::{win_message, GameEvent, DRAW_MESSAGE};
use super::HUMAN;

/// Game status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Mark),
    /// Board filled without a five
    Draw,
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// One game session: board, side to move, status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub turn: Mark,
    pub status: GameStatus,
    pub last_move: Option<Pos>,
    pub winning_line: Option<[Pos; WIN_LENGTH]>,
    pub move_count: u32,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
            winning_line: None,
            move_count: 0,
        }
    }

    /// Back to an empty board with X to move
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Place `acting` at `pos`, then settle win / draw / turn change.
    ///
    /// On error nothing changes. On success the returned events describe
    /// the placement and, if the game ended, the announcement.
    pub fn apply(&mut self, pos: Pos, acting: Mark) -> Result<Vec<GameEvent>, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::Occupied { pos });
        }
        if acting != self.turn {
            return Err(MoveError::OutOfTurn { expected: self.turn });
        }

        self.board.place_stone(pos, acting);
        self.last_move = Some(pos);
        self.move_count += 1;

        let mut events = vec![GameEvent::Placed { pos, mark: acting }];

        if let Some(line) = find_five_line(&self.board) {
            self.status = GameStatus::Won(acting);
            self.winning_line = Some(line);
            events.push(GameEvent::Announced(win_message(acting, HUMAN)));
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
            events.push(GameEvent::Announced(DRAW_MESSAGE.to_string()));
        } else {
            self.turn = acting.opponent();
        }

        Ok(events)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
