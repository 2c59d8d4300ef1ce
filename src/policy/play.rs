//! Playing two policies against each other.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Board, Mark, Move};
use crate::rules::{evaluate, Outcome};

use super::policies::Policy;

/// A policy misbehaved during a play-out.
#[derive(Clone, Debug, PartialEq, Eq, derive_more::Display)]
pub enum PlayError {
    /// The policy returned no move on an open board.
    #[display("{} had free cells but chose no move", _0)]
    NoMove(Mark),

    /// The policy chose a cell that was already taken.
    #[display("{} chose occupied cell {}", mark, cell)]
    Occupied { mark: Mark, cell: Move },
}

impl std::error::Error for PlayError {}

/// A finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// How the game ended.
    pub outcome: Outcome,
    /// Cells claimed, in order.
    pub moves: Vec<Move>,
    /// The final position.
    pub board: Board,
}

/// Play from `board` until the game ends, `to_move` first.
///
/// `x` picks for `Mark::X` and `o` for `Mark::O`.
pub fn play_out<X, O>(
    mut board: Board,
    mut to_move: Mark,
    x: &mut X,
    o: &mut O,
) -> Result<GameRecord, PlayError>
where
    X: Policy + ?Sized,
    O: Policy + ?Sized,
{
    let mut moves = Vec::new();

    loop {
        let outcome = evaluate(&board);
        if outcome.is_terminal() {
            return Ok(GameRecord { outcome, moves, board });
        }

        let choice = match to_move {
            Mark::X => x.choose(&board, to_move),
            Mark::O => o.choose(&board, to_move),
        };
        let mv = choice.ok_or(PlayError::NoMove(to_move))?;
        if !board.is_open(mv) {
            return Err(PlayError::Occupied { mark: to_move, cell: mv });
        }

        trace!(mark = %to_move, cell = mv.index(), "play-out move");
        board.place(mv, to_move);
        moves.push(mv);
        to_move = to_move.opponent();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{RandomPolicy, ScriptedPolicy};
    use crate::search::Minimax;

    struct Stubborn;

    impl Policy for Stubborn {
        fn choose(&mut self, _board: &Board, _mark: Mark) -> Option<Move> {
            Move::new(0)
        }
    }

    struct Silent;

    impl Policy for Silent {
        fn choose(&mut self, _board: &Board, _mark: Mark) -> Option<Move> {
            None
        }
    }

    #[test]
    fn test_scripted_game() {
        // X takes the top row while O wastes moves in the middle row.
        let mut x = ScriptedPolicy::from_indices(&[0, 1, 2]);
        let mut o = ScriptedPolicy::from_indices(&[3, 4]);

        let record = play_out(Board::new(), Mark::X, &mut x, &mut o).unwrap();

        assert!(record.outcome.is_win_for(Mark::X));
        assert_eq!(record.moves.len(), 5);
        assert_eq!(record.board.to_string(), "XXXOO....");
    }

    #[test]
    fn test_terminal_start_returns_immediately() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        let record = play_out(board, Mark::X, &mut Silent, &mut Silent).unwrap();
        assert_eq!(record.outcome, Outcome::Draw);
        assert!(record.moves.is_empty());
    }

    #[test]
    fn test_illegal_policies_reported() {
        let err = play_out(Board::new(), Mark::X, &mut Silent, &mut Silent).unwrap_err();
        assert_eq!(err, PlayError::NoMove(Mark::X));

        let err = play_out(Board::new(), Mark::X, &mut Stubborn, &mut Stubborn).unwrap_err();
        assert_eq!(err, PlayError::Occupied { mark: Mark::O, cell: Move::new(0).unwrap() });
    }

    #[test]
    fn test_engine_self_play_draws() {
        let mut x = Minimax::default();
        let mut o = Minimax::default();
        let record = play_out(Board::new(), Mark::X, &mut x, &mut o).unwrap();
        assert_eq!(record.outcome, Outcome::Draw);
    }

    #[test]
    fn test_engine_beats_or_draws_random() {
        let mut engine = Minimax::default();
        for seed in 0..10 {
            let mut random = RandomPolicy::new(seed);
            let record = play_out(Board::new(), Mark::X, &mut random, &mut engine).unwrap();
            assert!(!record.outcome.is_win_for(Mark::X), "seed {seed}: {:?}", record);
        }
    }
}
