//! Search module for the bot
//!
//! Contains the threat scanner: speculative single-cell probes that find
//! where a mark would complete five in a row.

pub mod threat;

pub use threat::{completes_five, find_move, find_potential_threats};
