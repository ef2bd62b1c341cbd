//! Presentation boundary
//!
//! The game never draws anything itself. Every state change is described by a
//! [`GameEvent`], and a [`Renderer`] turns those events into whatever the
//! front end shows.

use crate::board::{Mark, Pos};

/// Display operations the game core needs from a front end.
pub trait Renderer {
    /// Show `mark` at `pos`
    fn render(&mut self, pos: Pos, mark: Mark);
    /// Remove every displayed mark
    fn clear_all(&mut self);
    /// Show a terminal message
    fn announce(&mut self, message: &str);
    /// Hide the terminal message
    fn dismiss(&mut self);
}

/// One observable change produced by the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A mark was written to the board
    Placed { pos: Pos, mark: Mark },
    /// The game ended with this message
    Announced(String),
    /// The board was reset
    Cleared,
    /// The terminal message should be hidden
    Dismissed,
}

impl GameEvent {
    /// Forward this event to a renderer
    pub fn apply_to<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        match self {
            GameEvent::Placed { pos, mark } => renderer.render(*pos, *mark),
            GameEvent::Announced(message) => renderer.announce(message),
            GameEvent::Cleared => renderer.clear_all(),
            GameEvent::Dismissed => renderer.dismiss(),
        }
    }
}

/// Forward a batch of events in order
pub fn render_all<R: Renderer + ?Sized>(events: &[GameEvent], renderer: &mut R) {
    for event in events {
        event.apply_to(renderer);
    }
}

/// Terminal message for a win, relabeled from the human's point of view.
///
/// The raw form is `"<SYMBOL> WIN!"`; it is shown as `"USER WIN!"` when the
/// human's symbol won and `"BOT WIN!"` when the bot's symbol won.
pub fn win_message(winner: Mark, human: Mark) -> String {
    let raw = format!("{} WIN!", winner.symbol());
    if winner == human {
        "USER WIN!".to_string()
    } else if winner == human.opponent() {
        "BOT WIN!".to_string()
    } else {
        raw
    }
}

/// Terminal message when the board fills with no winner
pub const DRAW_MESSAGE: &str = "DRAW!";

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl Renderer for Recorder {
        fn render(&mut self, pos: Pos, mark: Mark) {
            self.calls.push(format!("render {} {}", pos, mark.symbol()));
        }
        fn clear_all(&mut self) {
            self.calls.push("clear".into());
        }
        fn announce(&mut self, message: &str) {
            self.calls.push(format!("announce {message}"));
        }
        fn dismiss(&mut self) {
            self.calls.push("dismiss".into());
        }
    }

    #[test]
    fn test_events_map_to_renderer_calls() {
        let events = vec![
            GameEvent::Placed { pos: Pos::new(1, 2), mark: Mark::X },
            GameEvent::Announced("USER WIN!".into()),
            GameEvent::Cleared,
            GameEvent::Dismissed,
        ];
        let mut recorder = Recorder::default();
        render_all(&events, &mut recorder);
        assert_eq!(
            recorder.calls,
            vec!["render (1, 2) X", "announce USER WIN!", "clear", "dismiss"]
        );
    }

    #[test]
    fn test_win_message_relabeling() {
        assert_eq!(win_message(Mark::X, Mark::X), "USER WIN!");
        assert_eq!(win_message(Mark::O, Mark::X), "BOT WIN!");
        // Human playing O
        assert_eq!(win_message(Mark::O, Mark::O), "USER WIN!");
        assert_eq!(win_message(Mark::X, Mark::O), "BOT WIN!");
    }
}
