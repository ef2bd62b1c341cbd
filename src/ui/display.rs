//! What the screen currently shows
//!
//! The UI never reads marks from the game board. It keeps its own copy that
//! only changes through [`Renderer`] calls, the same way a DOM grid would.

use crate::board::{Mark, Pos, BOARD_SIZE};
use crate::game::Renderer;

/// Displayed marks plus the open terminal message, if any
pub struct BoardDisplay {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
    message: Option<String>,
}

impl Default for BoardDisplay {
    fn default() -> Self {
        Self {
            cells: [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE],
            message: None,
        }
    }
}

impl BoardDisplay {
    #[inline]
    pub fn get(&self, pos: Pos) -> Mark {
        self.cells[pos.row as usize][pos.col as usize]
    }

    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl Renderer for BoardDisplay {
    fn render(&mut self, pos: Pos, mark: Mark) {
        self.cells[pos.row as usize][pos.col as usize] = mark;
    }

    fn clear_all(&mut self) {
        self.cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
    }

    fn announce(&mut self, message: &str) {
        self.message = Some(message.to_string());
    }

    fn dismiss(&mut self) {
        self.message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{render_all, Game};

    #[test]
    fn test_display_tracks_game_board() {
        let mut game = Game::with_seed(9);
        let mut display = BoardDisplay::default();

        for pos in [Pos::new(5, 5), Pos::new(5, 6), Pos::new(0, 0)] {
            let events = game.on_cell_activated(pos);
            render_all(&events, &mut display);
        }

        for pos in Pos::all() {
            assert_eq!(display.get(pos), game.state().board.get(pos));
        }
    }

    #[test]
    fn test_restart_clears_display_and_message() {
        let mut display = BoardDisplay::default();
        display.render(Pos::new(1, 1), Mark::X);
        display.announce("USER WIN!");
        assert_eq!(display.message(), Some("USER WIN!"));

        let mut game = Game::with_seed(1);
        render_all(&game.restart(), &mut display);

        assert_eq!(display.get(Pos::new(1, 1)), Mark::Empty);
        assert_eq!(display.message(), None);
    }
}
