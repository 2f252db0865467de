//! ScoreKeeper bindings for Python.

use pyo3::prelude::*;

use crate::core::{RollRecord, ScoringConfig};
use crate::scoring::ScoreKeeper;
use crate::sim::RandomBowler;

/// Python wrapper for RollRecord.
#[pyclass(name = "RollRecord")]
#[derive(Clone, Debug)]
pub struct PyRollRecord(pub RollRecord);

#[pymethods]
impl PyRollRecord {
    #[getter]
    fn round(&self) -> u32 {
        self.0.round
    }

    #[getter]
    fn pins(&self) -> u32 {
        self.0.pins
    }

    /// Multiplier factor (1, 2 or 3).
    #[getter]
    fn multiplier(&self) -> u32 {
        self.0.multiplier.factor()
    }

    #[getter]
    fn points(&self) -> u32 {
        self.0.points
    }

    #[getter]
    fn strike(&self) -> bool {
        self.0.strike
    }

    fn __repr__(&self) -> String {
        format!(
            "RollRecord(round={}, pins={}, multiplier={}, points={})",
            self.0.round, self.0.pins, self.0.multiplier, self.0.points
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Python wrapper for ScoreKeeper.
#[pyclass(name = "ScoreKeeper")]
#[derive(Clone, Debug)]
pub struct PyScoreKeeper(pub ScoreKeeper);

#[pymethods]
impl PyScoreKeeper {
    /// Create a new game.
    ///
    /// # Arguments
    /// - pins: Pins standing at the start of each frame
    /// - frames: Frames in regulation play
    #[new]
    #[pyo3(signature = (pins = 10, frames = 10))]
    fn new(pins: u32, frames: u32) -> PyResult<Self> {
        let config = ScoringConfig::new().with_pins(pins).with_frames(frames);
        ScoreKeeper::with_config(config)
            .map(Self)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))
    }

    /// Record a roll. Raises ValueError for an illegal value and
    /// RuntimeError once the game is over.
    fn roll(&mut self, value: i32) -> PyResult<PyRollRecord> {
        Ok(PyRollRecord(self.0.roll(value)?))
    }

    fn is_over(&self) -> bool {
        self.0.is_over()
    }

    #[getter]
    fn points(&self) -> u32 {
        self.0.points()
    }

    #[getter]
    fn rounds(&self) -> u32 {
        self.0.rounds()
    }

    #[getter]
    fn pending_bonus_rolls(&self) -> u32 {
        self.0.pending_bonus_rolls()
    }

    /// Values the next roll may take.
    fn legal_rolls(&self) -> Vec<u32> {
        self.0.legal_rolls().collect()
    }

    /// Accepted rolls, oldest first.
    fn history(&self) -> Vec<PyRollRecord> {
        self.0.history().iter().copied().map(PyRollRecord).collect()
    }

    /// Finish the game with random legal rolls. Returns the rolls made.
    #[pyo3(signature = (seed = 42))]
    fn play_out(&mut self, seed: u64) -> PyResult<u32> {
        Ok(RandomBowler::new(seed).play_out(&mut self.0)?)
    }

    fn copy(&self) -> Self {
        self.clone()
    }

    fn __repr__(&self) -> String {
        let status = if self.0.is_over() { "over" } else { "ongoing" };
        format!(
            "ScoreKeeper(points={}, rounds={}, status={})",
            self.0.points(),
            self.0.rounds(),
            status
        )
    }
}
