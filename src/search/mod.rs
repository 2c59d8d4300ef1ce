//! Minimax search for the automated player.
//!
//! ## Overview
//!
//! The engine explores every legal continuation of a position and returns
//! the game-theoretically optimal move. Three strategies are available and
//! all of them pick the same move:
//!
//! - **Exhaustive**: plain minimax over the full tree (default)
//! - **AlphaBeta**: prunes branches that cannot change the choice
//! - **Memoized**: scores each distinct position once per call
//!
//! ## Usage
//!
//! ```rust
//! use tictac_minimax::core::{Board, Mark};
//! use tictac_minimax::search::{Minimax, SearchConfig, Strategy};
//!
//! let board: Board = "XX.O.....".parse().unwrap();
//!
//! let config = SearchConfig::default().with_strategy(Strategy::AlphaBeta);
//! let mut engine = Minimax::new(config);
//!
//! let mv = engine.best_move(&board, Mark::O).unwrap();
//! assert_eq!(mv.index(), 2);
//! println!("searched {} nodes", engine.stats().nodes);
//! ```

pub mod config;
pub mod minimax;
pub mod stats;

// Re-export main types
pub use config::{SearchConfig, Strategy};
pub use minimax::{best_move, search, terminal_score, Minimax, Score, WIN_SCORE};
pub use stats::SearchStats;
