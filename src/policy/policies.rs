//! Move-choosing policies.
//!
//! Policies are trait-based so that anything able to pick a cell can sit on
//! either side of a game:
//! - `Minimax`: the optimal engine
//! - `RandomPolicy`: uniform over free cells, seeded
//! - `ScriptedPolicy`: a fixed preference order, for reproducing lines of play

use crate::core::{Board, GameRng, Mark, Move};
use crate::search::Minimax;

/// Chooses a move for `mark` on `board`.
pub trait Policy {
    /// Pick a free cell, or `None` if there is nothing to pick.
    fn choose(&mut self, board: &Board, mark: Mark) -> Option<Move>;
}

impl Policy for Minimax {
    fn choose(&mut self, board: &Board, mark: Mark) -> Option<Move> {
        self.best_move(board, mark)
    }
}

impl<P: Policy + ?Sized> Policy for Box<P> {
    fn choose(&mut self, board: &Board, mark: Mark) -> Option<Move> {
        (**self).choose(board, mark)
    }
}

/// Uniformly random policy.
///
/// Deterministic per seed.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    pub fn new(seed: u64) -> Self {
        Self { rng: GameRng::new(seed) }
    }

    /// Use an existing RNG stream (e.g. a fork).
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Policy for RandomPolicy {
    fn choose(&mut self, board: &Board, _mark: Mark) -> Option<Move> {
        self.rng.pick_move(board)
    }
}

/// Plays the first free cell from a preference list.
///
/// Falls back to the lowest free index once the list is exhausted.
#[derive(Clone, Debug, Default)]
pub struct ScriptedPolicy {
    preferences: Vec<Move>,
}

impl ScriptedPolicy {
    pub fn new(preferences: impl IntoIterator<Item = Move>) -> Self {
        Self {
            preferences: preferences.into_iter().collect(),
        }
    }

    /// Build from raw indices, silently dropping any off the board.
    pub fn from_indices(indices: &[usize]) -> Self {
        Self::new(indices.iter().filter_map(|&i| Move::new(i)))
    }
}

impl Policy for ScriptedPolicy {
    fn choose(&mut self, board: &Board, _mark: Mark) -> Option<Move> {
        self.preferences
            .iter()
            .copied()
            .find(|&mv| board.is_open(mv))
            .or_else(|| board.empty_cells().first().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_random_policy_deterministic() {
        let b = board("X...O....");
        let mut p1 = RandomPolicy::new(99);
        let mut p2 = RandomPolicy::new(99);

        for _ in 0..20 {
            assert_eq!(p1.choose(&b, Mark::X), p2.choose(&b, Mark::X));
        }
    }

    #[test]
    fn test_scripted_policy_skips_taken() {
        let mut p = ScriptedPolicy::from_indices(&[4, 0, 8]);
        assert_eq!(p.choose(&board("....X...."), Mark::O), Move::new(0));
        assert_eq!(p.choose(&board("O...X...."), Mark::O), Move::new(8));
    }

    #[test]
    fn test_scripted_policy_fallback() {
        let mut p = ScriptedPolicy::from_indices(&[4, 42]);
        assert_eq!(p.choose(&board("XO..X...."), Mark::O), Move::new(2));
        assert_eq!(p.choose(&board("XOXXOOOXX"), Mark::O), None);
    }

    #[test]
    fn test_minimax_as_policy() {
        let mut p: Box<dyn Policy> = Box::new(Minimax::default());
        assert_eq!(p.choose(&board("O...O...."), Mark::O), Move::new(8));
    }
}
