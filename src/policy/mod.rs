//! Policies: anything that picks a move, and a driver to pit them against
//! each other.
//!
//! ```rust
//! use tictac_minimax::core::{Board, Mark};
//! use tictac_minimax::policy::{play_out, RandomPolicy};
//! use tictac_minimax::search::Minimax;
//!
//! let mut engine = Minimax::default();
//! let mut sparring = RandomPolicy::new(42);
//!
//! let record = play_out(Board::new(), Mark::X, &mut sparring, &mut engine).unwrap();
//! assert!(!record.outcome.is_win_for(Mark::X));
//! ```

pub mod play;
pub mod policies;

pub use play::{play_out, GameRecord, PlayError};
pub use policies::{Policy, RandomPolicy, ScriptedPolicy};
