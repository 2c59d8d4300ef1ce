//! # tictac-minimax
//!
//! An unbeatable tic-tac-toe opponent.
//!
//! ## Design Principles
//!
//! 1. **Pure Core**: `evaluate` and `best_move` are pure functions of the
//!    board. The engine keeps no state between calls.
//!
//! 2. **Exhaustive Search**: No heuristics. Every continuation is explored
//!    and scored `10 - depth` for an automated win, `depth - 10` for a loss
//!    and `0` for a draw, so the engine wins as fast and loses as slowly as
//!    possible.
//!
//! 3. **Deterministic Ties**: Among equally scored moves the lowest cell
//!    index is chosen.
//!
//! ## Modules
//!
//! - `core`: Marks, cells, board, moves, lines, seeded RNG
//! - `rules`: Win/draw detection
//! - `search`: Minimax engine, configuration and statistics
//! - `policy`: Move-choosing policies and game play-outs
//! - `session`: Match state (turns, tally, input validation)
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod rules;
pub mod search;
pub mod policy;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{Board, BoardError, Cell, GameRng, Line, Mark, Move, MoveList, LINES};

pub use crate::rules::{evaluate, Outcome};

pub use crate::search::{best_move, Minimax, SearchConfig, SearchStats, Strategy};

pub use crate::policy::{play_out, GameRecord, PlayError, Policy, RandomPolicy, ScriptedPolicy};

pub use crate::session::{Match, MatchConfig, MoveError, Tally};
