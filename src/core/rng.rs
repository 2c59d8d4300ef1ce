//! Seeded randomness for non-optimal players.
//!
//! The search engine itself never uses randomness. `GameRng` exists so that
//! sparring opponents (see `policy::RandomPolicy`) are reproducible: the same
//! seed always plays the same game.
//!
//! ```
//! use tictac_minimax::core::{Board, GameRng};
//!
//! let board = Board::new();
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.pick_move(&board), b.pick_move(&board));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::board::{Board, Move};

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive an independent stream, e.g. one per simulated game.
    ///
    /// Forks are deterministic: the n-th fork of a given seed is always the
    /// same stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Pick a uniformly random free cell, or `None` on a full board.
    pub fn pick_move(&mut self, board: &Board) -> Option<Move> {
        let open = board.empty_cells();
        if open.is_empty() {
            return None;
        }
        Some(open[self.gen_range_usize(0..open.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mark;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_range_usize(0..1000), rng2.gen_range_usize(0..1000));
        }
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = GameRng::new(42);
        let mut forked = rng.fork();

        let seq1: Vec<_> = (0..10).map(|_| rng.gen_range_usize(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| forked.gen_range_usize(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        assert_eq!(rng1.fork().seed(), rng2.fork().seed());
        assert_ne!(rng1.fork().seed(), rng1.fork().seed());
    }

    #[test]
    fn test_pick_move_only_open_cells() {
        let mut rng = GameRng::new(3);
        let board: Board = "XOXOX....".parse().unwrap();

        for _ in 0..50 {
            let mv = rng.pick_move(&board).unwrap();
            assert!(board.is_open(mv));
        }
    }

    #[test]
    fn test_pick_move_full_board() {
        let mut rng = GameRng::new(3);
        let mut board = Board::new();
        for mv in Move::all() {
            board.place(mv, Mark::X);
        }
        assert_eq!(rng.pick_move(&board), None);
    }
}
