//! Errors raised when a move is refused.

use crate::core::{Mark, Move};

/// Why a move was rejected by the session.
#[derive(Clone, Debug, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Index outside 0-8.
    #[display("cell {} is off the board (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The cell is already taken.
    #[display("cell {} is already occupied", _0)]
    Occupied(Move),

    /// The game has already been won or drawn.
    #[display("game is already over")]
    GameOver,

    /// The other side is to move.
    #[display("it is not {}'s turn", _0)]
    NotYourTurn(Mark),
}

impl std::error::Error for MoveError {}
