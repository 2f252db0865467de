//! Python bindings for the rust-bowling scoring engine.
//!
//! # Quick Start
//!
//! ```python
//! import rust_bowling as bowling
//!
//! keeper = bowling.ScoreKeeper()
//! for pins in [10, 5, 4]:
//!     keeper.roll(pins)
//!
//! assert keeper.points == 28
//! assert not keeper.is_over()
//!
//! # Finish the game with random legal rolls
//! keeper.play_out(seed=42)
//! ```

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::core::RollError;

mod py_keeper;

pub use py_keeper::*;

impl From<RollError> for PyErr {
    fn from(err: RollError) -> Self {
        match err {
            RollError::GameOver { .. } => PyRuntimeError::new_err(err.to_string()),
            RollError::InvalidRoll { .. } | RollError::FrameOverflow { .. } => {
                PyValueError::new_err(err.to_string())
            }
        }
    }
}

/// rust-bowling: scoring for a bowling-variant roll game.
#[pymodule]
fn rust_bowling(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyScoreKeeper>()?;
    m.add_class::<PyRollRecord>()?;

    Ok(())
}
