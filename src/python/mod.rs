//! Python bindings for the tic-tac-toe engine.
//!
//! # Quick Start
//!
//! ```python
//! import tictac_minimax as ttt
//!
//! ttt.best_move("XX.O.....", "O")   # -> 2
//! ttt.evaluate("OOOXX....").winner  # -> "O"
//!
//! game = ttt.Match(human="X")
//! game.play_human(4)
//! cell, outcome = game.play_automated()
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_match;

pub use py_core::*;
pub use py_match::*;

/// tictac_minimax: an unbeatable tic-tac-toe opponent.
#[pymodule]
fn tictac_minimax(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyOutcome>()?;
    m.add_class::<PyMatch>()?;

    m.add_function(wrap_pyfunction!(evaluate, m)?)?;
    m.add_function(wrap_pyfunction!(best_move, m)?)?;

    Ok(())
}
