//! Exhaustive minimax with depth-adjusted terminal scores.
//!
//! Scores are from the automated side's point of view:
//!
//! - automated win: `10 - depth`
//! - human win: `depth - 10`
//! - draw: `0`
//!
//! The depth term makes the engine take the fastest win and drag out a loss
//! as long as possible. At the root, candidate cells are tried in ascending
//! order and a later cell only replaces the current choice when its score is
//! strictly greater, so the lowest index wins ties.
//!
//! Each recursive call receives its own copy of the board; the caller's
//! board is never modified.

use std::time::Instant;

use rustc_hash::FxHashMap;
use tracing::{debug, instrument, trace};

use crate::core::{Board, Mark, Move};
use crate::rules::{evaluate, Outcome};

use super::config::{SearchConfig, Strategy};
use super::stats::SearchStats;

/// Ranking of a position for the automated side. Higher is better.
pub type Score = i32;

/// Score of an immediate win, before the depth adjustment.
pub const WIN_SCORE: Score = 10;

/// Score of a finished game, or `None` if it is still in progress.
#[must_use]
pub fn terminal_score(outcome: &Outcome, ai: Mark, depth: u32) -> Option<Score> {
    let depth = depth as Score;
    match outcome {
        Outcome::InProgress => None,
        Outcome::Draw => Some(0),
        Outcome::Win { mark, .. } if *mark == ai => Some(WIN_SCORE - depth),
        Outcome::Win { .. } => Some(depth - WIN_SCORE),
    }
}

/// Score `board` for the automated side `ai`.
///
/// `maximizing` is true when `ai` moves next. `depth` counts the plies
/// already played since the search began.
#[must_use]
pub fn search(board: &Board, ai: Mark, depth: u32, maximizing: bool) -> Score {
    Minimax::default().exhaustive(*board, ai, depth, maximizing)
}

/// The optimal move for `ai` using the default exhaustive search.
///
/// Returns `None` if the board is already won or full.
///
/// ```
/// use tictac_minimax::core::{Board, Mark};
/// use tictac_minimax::search::best_move;
///
/// let board: Board = "O...O....".parse().unwrap();
/// assert_eq!(best_move(&board, Mark::O).map(|m| m.index()), Some(8));
/// ```
#[must_use]
pub fn best_move(board: &Board, ai: Mark) -> Option<Move> {
    Minimax::default().best_move(board, ai)
}

/// Minimax search context.
///
/// Holds configuration, statistics for the last call and, for the memoized
/// strategy, a scratch table that is cleared at the start of every call.
/// No state carries over from one call to the next.
#[derive(Clone, Debug, Default)]
pub struct Minimax {
    config: SearchConfig,
    stats: SearchStats,
    table: FxHashMap<Board, Score>,
}

impl Minimax {
    /// Create a new search context.
    pub fn new(config: SearchConfig) -> Self {
        let table = match config.strategy {
            Strategy::Memoized => {
                FxHashMap::with_capacity_and_hasher(config.table_capacity, Default::default())
            }
            _ => FxHashMap::default(),
        };

        Self {
            config,
            stats: SearchStats::default(),
            table,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics from the most recent `best_move` call.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Find the optimal move for `ai`.
    ///
    /// Returns `None` if the board is already won or full.
    #[instrument(level = "debug", skip(self, board), fields(board = %board))]
    pub fn best_move(&mut self, board: &Board, ai: Mark) -> Option<Move> {
        let start = Instant::now();
        self.stats.reset();
        self.table.clear();

        if evaluate(board).is_terminal() {
            debug!("board is terminal, no move to make");
            return None;
        }

        let mut best: Option<(Move, Score)> = None;

        for mv in board.empty_cells() {
            let child = board.with_move(mv, ai);
            let score = match self.config.strategy {
                Strategy::Exhaustive => self.exhaustive(child, ai, 0, false),
                Strategy::Memoized => self.memoized(child, ai, 0, false),
                Strategy::AlphaBeta => {
                    let alpha = best.map_or(Score::MIN, |(_, s)| s);
                    self.alpha_beta(child, ai, 0, false, alpha, Score::MAX)
                }
            };
            trace!(cell = mv.index(), score, "scored candidate");

            // Strict comparison keeps the lowest index among equal scores.
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((mv, score));
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;

        if let Some((mv, score)) = best {
            debug!(
                cell = mv.index(),
                score,
                nodes = self.stats.nodes,
                time_us = self.stats.time_us,
                "chose move"
            );
        }

        best.map(|(mv, _)| mv)
    }

    /// Score a terminal position, counting it.
    fn terminal(&mut self, board: &Board, ai: Mark, depth: u32) -> Option<Score> {
        let score = terminal_score(&evaluate(board), ai, depth)?;
        self.stats.terminal_nodes += 1;
        Some(score)
    }

    /// Max or min over every child, scored by `recurse`.
    ///
    /// Only called on non-terminal boards, which always have a free cell.
    fn expand(
        &mut self,
        board: Board,
        ai: Mark,
        depth: u32,
        maximizing: bool,
        recurse: fn(&mut Self, Board, Mark, u32, bool) -> Score,
    ) -> Score {
        let mark = if maximizing { ai } else { ai.opponent() };
        let mut best = if maximizing { Score::MIN } else { Score::MAX };

        for mv in board.empty_cells() {
            let score = recurse(self, board.with_move(mv, mark), ai, depth + 1, !maximizing);
            best = if maximizing { best.max(score) } else { best.min(score) };
        }

        best
    }

    fn exhaustive(&mut self, board: Board, ai: Mark, depth: u32, maximizing: bool) -> Score {
        self.stats.nodes += 1;
        match self.terminal(&board, ai, depth) {
            Some(score) => score,
            None => self.expand(board, ai, depth, maximizing, Self::exhaustive),
        }
    }

    // Within one call a board fixes both depth and side to move, so the
    // board alone is a sufficient key.
    fn memoized(&mut self, board: Board, ai: Mark, depth: u32, maximizing: bool) -> Score {
        if let Some(&score) = self.table.get(&board) {
            self.stats.table_hits += 1;
            return score;
        }

        self.stats.nodes += 1;
        let score = match self.terminal(&board, ai, depth) {
            Some(score) => score,
            None => self.expand(board, ai, depth, maximizing, Self::memoized),
        };
        self.table.insert(board, score);
        score
    }

    /// Fail-soft alpha-beta. Exact whenever the true score lies strictly
    /// inside `(alpha, beta)`.
    fn alpha_beta(
        &mut self,
        board: Board,
        ai: Mark,
        depth: u32,
        maximizing: bool,
        mut alpha: Score,
        mut beta: Score,
    ) -> Score {
        self.stats.nodes += 1;
        if let Some(score) = self.terminal(&board, ai, depth) {
            return score;
        }

        let mark = if maximizing { ai } else { ai.opponent() };
        let mut best = if maximizing { Score::MIN } else { Score::MAX };

        for mv in board.empty_cells() {
            let score = self.alpha_beta(board.with_move(mv, mark), ai, depth + 1, !maximizing, alpha, beta);
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}
