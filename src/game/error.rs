//! Rejected move reasons.

use derive_more::{Display, Error};

use crate::board::{Mark, Pos};

/// Why a move was not applied. The board, turn and status are untouched
/// whenever one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Target cell already holds a mark
    #[display("cell {pos} is already occupied")]
    Occupied { pos: Pos },
    /// The game has ended
    #[display("the game is already over")]
    GameOver,
    /// Mark played out of turn
    #[display("it is {expected:?}'s turn")]
    OutOfTurn { expected: Mark },
}
