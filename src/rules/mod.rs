//! Game rules
//!
//! Five-in-a-row is the only win condition; there are no captures or
//! forbidden moves.

pub mod win;

pub use win::{check_win, find_five_line};
