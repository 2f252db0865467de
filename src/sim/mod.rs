//! Simulated play.
//!
//! `RandomBowler` feeds a `ScoreKeeper` legal rolls drawn from a seeded
//! `GameRng`, so whole games can be generated reproducibly.

pub mod bowler;

pub use bowler::{RandomBowler, RollPolicy, StrikeBias, UniformRolls};
