//! GUI module
//!
//! Native front end built on egui/eframe. It is the game's renderer and
//! input source: clicks go to [`Game::on_cell_activated`](crate::Game::on_cell_activated)
//! and the returned events update [`BoardDisplay`].

mod app;
mod board_view;
mod display;
mod theme;

pub use app::GomokuApp;
pub use display::BoardDisplay;
pub use theme::{WINDOW_MIN_SIZE, WINDOW_SIZE};
