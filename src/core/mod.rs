//! Core types: marks, cells, the board, moves, lines and seeded RNG.
//!
//! Everything here is plain data. None of it knows who is human and who is
//! automated; that assignment lives in the session.

pub mod mark;
pub mod board;
pub mod line;
pub mod rng;

pub use mark::{Cell, Mark};
pub use board::{Board, BoardError, Move, MoveList, CELL_COUNT};
pub use line::{Line, LINES};
pub use rng::GameRng;
