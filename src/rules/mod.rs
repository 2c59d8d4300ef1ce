//! Game rules: terminal-state detection.
//!
//! `evaluate` answers one question about a board: is it won, drawn, or
//! still open? The search engine calls it at every node; the session calls
//! it after every move.

pub mod outcome;

pub use outcome::{evaluate, Outcome};
