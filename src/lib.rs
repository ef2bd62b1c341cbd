//! Five-in-a-row on a 10x10 board against a scripted bot
//!
//! The human plays X and moves first; the bot plays O and answers every human
//! move immediately. Five identical marks in a row, column or diagonal win.
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards and scoped probes
//! - [`rules`]: Five-in-a-row detection
//! - [`search`]: Threat scanning (where would a mark complete five?)
//! - [`engine`]: The bot's fixed priority list of rules
//! - [`game`]: Session state, turn-taking and the renderer boundary
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Game, GameEvent, GameStatus, Mark, Pos};
//!
//! let mut game = Game::with_seed(1);
//! let events = game.on_cell_activated(Pos::new(5, 5));
//!
//! // Human move plus the bot's reply
//! let placed = events
//!     .iter()
//!     .filter(|e| matches!(e, GameEvent::Placed { .. }))
//!     .count();
//! assert_eq!(placed, 2);
//! assert_eq!(game.state().turn, Mark::X);
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```
//!
//! # Bot Priority
//!
//! 1. Immediate winning move
//! 2. Block the opponent's immediate win
//! 3. Deny opponent threats
//! 4. Own threats
//! 5. Defensive pre-emption
//! 6. Random empty cell

pub mod board;
pub mod engine;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Mark, Pos, BOARD_SIZE, WIN_LENGTH};
pub use engine::{BotEngine, BotMove, MoveKind};
pub use game::{Game, GameEvent, GameState, GameStatus, MoveError, Renderer};
