//! Match bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::search::SearchConfig;
use crate::session::{Match, MatchConfig};

use super::py_core::{parse_mark, parse_strategy, PyOutcome};

/// Python wrapper for Match.
///
/// Holds the board, turn, outcome and tally of a human-vs-engine series.
#[pyclass(name = "Match")]
pub struct PyMatch {
    inner: Match,
}

#[pymethods]
impl PyMatch {
    /// Create a new match.
    ///
    /// # Arguments
    /// - human: The human's mark ("X" or "O")
    /// - human_starts: Whether the human opens each game
    /// - strategy: "exhaustive", "alphabeta" or "memoized"
    #[new]
    #[pyo3(signature = (human = "X", human_starts = true, strategy = "exhaustive"))]
    fn new(human: &str, human_starts: bool, strategy: &str) -> PyResult<Self> {
        let config = MatchConfig::default()
            .with_human(parse_mark(human)?)
            .with_human_starts(human_starts)
            .with_search(SearchConfig::default().with_strategy(parse_strategy(strategy)?));
        Ok(Self {
            inner: Match::new(config),
        })
    }

    /// Claim a cell for the human.
    fn play_human(&mut self, index: usize) -> PyResult<PyOutcome> {
        self.inner
            .play_human(index)
            .map(PyOutcome)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Let the engine move. Returns (cell, outcome).
    fn play_automated(&mut self) -> PyResult<(usize, PyOutcome)> {
        self.inner
            .play_automated()
            .map(|(mv, outcome)| (mv.index(), PyOutcome(outcome)))
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Start another game, keeping the tally.
    fn new_game(&mut self) {
        self.inner.new_game();
    }

    /// Board as nine symbols.
    #[getter]
    fn board(&self) -> String {
        self.inner.board().to_string()
    }

    #[getter]
    fn outcome(&self) -> PyOutcome {
        PyOutcome(self.inner.outcome())
    }

    #[getter]
    fn to_move(&self) -> String {
        self.inner.to_move().to_string()
    }

    /// (human wins, automated wins, draws)
    #[getter]
    fn tally(&self) -> (u32, u32, u32) {
        let t = self.inner.tally();
        (t.human, t.automated, t.draws)
    }

    fn is_human_turn(&self) -> bool {
        self.inner.is_human_turn()
    }

    fn is_winning_cell(&self, index: usize) -> bool {
        self.inner.is_winning_cell(index)
    }

    fn __repr__(&self) -> String {
        format!(
            "Match(board={}, outcome={}, tally=({}))",
            self.inner.board(),
            self.inner.outcome(),
            self.inner.tally()
        )
    }
}
