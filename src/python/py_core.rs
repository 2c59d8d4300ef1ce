//! Core bindings for Python: outcome type and the two engine functions.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Board, Mark};
use crate::rules::{self, Outcome};
use crate::search::{self, Strategy};

pub(crate) fn parse_board(board: &str) -> PyResult<Board> {
    board.parse::<Board>().map_err(|e| PyValueError::new_err(e.to_string()))
}

pub(crate) fn parse_mark(mark: &str) -> PyResult<Mark> {
    let mut chars = mark.chars();
    match (chars.next().and_then(Mark::from_symbol), chars.next()) {
        (Some(m), None) => Ok(m),
        _ => Err(PyValueError::new_err(format!("invalid mark {:?}, expected \"X\" or \"O\"", mark))),
    }
}

pub(crate) fn parse_strategy(strategy: &str) -> PyResult<Strategy> {
    match strategy.to_ascii_lowercase().as_str() {
        "exhaustive" => Ok(Strategy::Exhaustive),
        "alphabeta" | "alpha_beta" => Ok(Strategy::AlphaBeta),
        "memoized" => Ok(Strategy::Memoized),
        other => Err(PyValueError::new_err(format!("unknown strategy {:?}", other))),
    }
}

/// Python wrapper for Outcome.
#[pyclass(name = "Outcome")]
#[derive(Clone, Debug)]
pub struct PyOutcome(pub Outcome);

#[pymethods]
impl PyOutcome {
    /// One of "in_progress", "win", "draw".
    #[getter]
    fn status(&self) -> &'static str {
        match self.0 {
            Outcome::InProgress => "in_progress",
            Outcome::Win { .. } => "win",
            Outcome::Draw => "draw",
        }
    }

    /// Winning mark, or None.
    #[getter]
    fn winner(&self) -> Option<String> {
        self.0.winner().map(|m| m.to_string())
    }

    /// Winning cell indices, or None.
    #[getter]
    fn line(&self) -> Option<Vec<usize>> {
        self.0.winning_line().map(|l| l.cells().to_vec())
    }

    fn is_terminal(&self) -> bool {
        self.0.is_terminal()
    }

    fn __repr__(&self) -> String {
        format!("Outcome({})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Evaluate a board given as nine symbols, e.g. "XO.X.O...".
#[pyfunction]
pub fn evaluate(board: &str) -> PyResult<PyOutcome> {
    let board = parse_board(board)?;
    Ok(PyOutcome(rules::evaluate(&board)))
}

/// Optimal cell for `mark`, or None if the board is already decided.
#[pyfunction]
#[pyo3(signature = (board, mark = "O"))]
pub fn best_move(board: &str, mark: &str) -> PyResult<Option<usize>> {
    let board = parse_board(board)?;
    let mark = parse_mark(mark)?;
    Ok(search::best_move(&board, mark).map(|mv| mv.index()))
}
