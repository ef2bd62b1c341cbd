//! Turn-taking controller
//!
//! Owns the session state and the bot. A human move is applied, and while the
//! game is still running with the bot to move, the bot's reply is selected
//! and applied in the same call. Input never observes the bot's turn.

use tracing::{debug, info, instrument};

use crate::board::{Mark, Pos};
use crate::engine::{BotEngine, BotMove};

use super::error::MoveError;
use super::events::GameEvent;
use super::state::{GameState, GameStatus};
use super::{BOT, HUMAN};

/// Human-versus-bot game session.
pub struct Game {
    state: GameState,
    bot: BotEngine,
    last_bot_move: Option<BotMove>,
}

impl Game {
    pub fn new(bot: BotEngine) -> Self {
        Self {
            state: GameState::new(),
            bot,
            last_bot_move: None,
        }
    }

    /// Game with a deterministic bot
    pub fn with_seed(seed: u64) -> Self {
        Self::new(BotEngine::with_seed(seed))
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    /// The bot's most recent choice, cleared on restart
    #[inline]
    pub fn last_bot_move(&self) -> Option<BotMove> {
        self.last_bot_move
    }

    #[inline]
    pub fn bot_seed(&self) -> u64 {
        self.bot.seed()
    }

    /// Apply one move for `acting`. No bot reply is triggered here.
    pub fn apply_move(&mut self, pos: Pos, acting: Mark) -> Result<Vec<GameEvent>, MoveError> {
        let events = self.state.apply(pos, acting)?;
        if let GameStatus::Won(winner) = self.state.status {
            info!(%pos, winner = ?winner, moves = self.state.move_count, "game won");
        } else if self.state.status == GameStatus::Draw {
            info!(moves = self.state.move_count, "game drawn");
        }
        Ok(events)
    }

    /// Human clicked `pos`.
    ///
    /// Invalid clicks (occupied cell, finished game) are ignored and yield no
    /// events. Otherwise the events cover the human move and the bot's reply.
    #[instrument(level = "debug", skip(self))]
    pub fn on_cell_activated(&mut self, pos: Pos) -> Vec<GameEvent> {
        let mut events = match self.apply_move(pos, HUMAN) {
            Ok(events) => events,
            Err(err) => {
                debug!(%err, "ignoring cell activation");
                return Vec::new();
            }
        };

        while self.state.status == GameStatus::InProgress && self.state.turn == BOT {
            let Some(choice) = self.bot.select_move(&self.state.board, BOT) else {
                break;
            };
            match self.apply_move(choice.pos, BOT) {
                Ok(bot_events) => {
                    self.last_bot_move = Some(choice);
                    events.extend(bot_events);
                }
                Err(err) => {
                    debug!(%err, pos = %choice.pos, "bot move rejected");
                    break;
                }
            }
        }

        events
    }

    /// Start over: empty board, X to move.
    pub fn restart(&mut self) -> Vec<GameEvent> {
        self.state.reset();
        self.last_bot_move = None;
        info!("game restarted");
        vec![GameEvent::Cleared, GameEvent::Dismissed]
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(BotEngine::new())
    }
}
