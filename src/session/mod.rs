//! Session state for a human-vs-engine match.
//!
//! The session validates human input, asks the engine for a move on the
//! automated side's turn, detects the end of each game and keeps a running
//! tally across games. It is the only stateful part of the crate.
//!
//! ```rust
//! use tictac_minimax::session::{Match, MoveError};
//!
//! let mut game = Match::default();
//! game.play_human(4).unwrap();
//! let (reply, _) = game.play_automated().unwrap();
//! assert_eq!(game.play_human(reply.index()), Err(MoveError::Occupied(reply)));
//! ```

pub mod error;
pub mod game;
pub mod tally;

pub use error::MoveError;
pub use game::{Match, MatchConfig};
pub use tally::Tally;
