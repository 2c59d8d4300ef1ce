//! Win and draw detection.
//!
//! `evaluate` is the terminal-state oracle for the search engine and the
//! end-of-game check for the session. It only inspects content: boards that
//! could never arise from alternating play are evaluated all the same.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Line, Mark, LINES};

/// State of a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// At least one free cell and no completed line.
    InProgress,
    /// `mark` owns every cell of `line`.
    Win { mark: Mark, line: Line },
    /// Board full without a completed line.
    Draw,
}

impl Outcome {
    /// Check if the game is over.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// The winning mark, if any.
    #[must_use]
    pub const fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// The completed line, if any.
    #[must_use]
    pub const fn winning_line(&self) -> Option<Line> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Check if `mark` won.
    #[must_use]
    pub fn is_win_for(&self, mark: Mark) -> bool {
        self.winner() == Some(mark)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::Win { mark, line } => write!(f, "{} wins on {}", mark, line),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// Evaluate a board.
///
/// Lines are scanned in `LINES` order and the first completed one is
/// reported, so the result is deterministic even for boards with more than
/// one completed line.
///
/// ```
/// use tictac_minimax::core::{Board, Line, Mark};
/// use tictac_minimax::rules::{evaluate, Outcome};
///
/// let board: Board = "O...O...O".parse().unwrap();
/// assert_eq!(evaluate(&board), Outcome::Win { mark: Mark::O, line: Line([0, 4, 8]) });
/// assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
/// ```
#[must_use]
pub fn evaluate(board: &Board) -> Outcome {
    let cells = board.cells();

    for line in LINES {
        let [a, b, c] = line.cells();
        if let Some(mark) = cells[a].mark() {
            if cells[b] == cells[a] && cells[c] == cells[a] {
                return Outcome::Win { mark, line };
            }
        }
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_every_line_detected() {
        for line in LINES {
            for mark in Mark::ALL {
                let mut b = Board::new();
                for i in line.cells() {
                    b.place(crate::core::Move::new(i).unwrap(), mark);
                }
                assert_eq!(evaluate(&b), Outcome::Win { mark, line });
            }
        }
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        let b = board("XXXOOXXOO");
        assert_eq!(evaluate(&b), Outcome::Win { mark: Mark::X, line: LINES[0] });
    }

    #[test]
    fn test_draw() {
        let b = board("XOXXOOOXX");
        assert_eq!(evaluate(&b), Outcome::Draw);
        assert!(evaluate(&b).is_terminal());
        assert_eq!(evaluate(&b).winner(), None);
    }

    #[test]
    fn test_first_line_in_scan_order_wins() {
        // Row 0 and column 0 both complete; row comes first.
        let b = board("XXXX..X..");
        assert_eq!(evaluate(&b).winning_line(), Some(LINES[0]));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let b = board("XXO......");
        assert_eq!(evaluate(&b), Outcome::InProgress);
    }

    #[test]
    fn test_outcome_helpers() {
        let win = Outcome::Win { mark: Mark::O, line: LINES[7] };
        assert!(win.is_terminal());
        assert!(win.is_win_for(Mark::O));
        assert!(!win.is_win_for(Mark::X));
        assert_eq!(win.to_string(), "O wins on [2, 4, 6]");
        assert!(!Outcome::InProgress.is_terminal());
    }
}
