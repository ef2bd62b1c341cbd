//! Game session: state, turn-taking and the presentation boundary
//!
//! The human always plays X and moves first; the bot plays O.

mod controller;
mod error;
mod events;
mod state;

pub use controller::Game;
pub use error::MoveError;
pub use events::{render_all, win_message, GameEvent, Renderer, DRAW_MESSAGE};
pub use state::{GameState, GameStatus};

use crate::board::Mark;

/// Symbol played by the human
pub const HUMAN: Mark = Mark::X;
/// Symbol played by the bot
pub const BOT: Mark = Mark::O;
