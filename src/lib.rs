//! # rust-bowling
//!
//! A scoring engine for a bowling-variant roll game.
//!
//! ## Rules
//!
//! - A roll knocks down 0 to 10 pins. A frame is an odd round plus the
//!   following even round, and its two rolls cannot exceed 10 pins.
//! - Clearing a frame in two rolls makes the next roll count double.
//! - A strike (10 on the first roll) makes the next two rolls count double
//!   and takes up the whole frame. A strike while a bonus is still active
//!   makes the next roll count triple.
//! - Regulation play is 20 rounds. Bonus rolls still pending at that point
//!   extend the game.
//!
//! ## Modules
//!
//! - `core`: Configuration, errors, multipliers, roll records, RNG
//! - `scoring`: The `ScoreKeeper` state machine
//! - `sim`: Seeded random bowlers for generating whole games

pub mod core;
pub mod scoring;
pub mod sim;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, Frame, FrameKind, GameRng, Multiplier, RollError, RollRecord, ScoringConfig,
    SnapshotError,
};

pub use crate::scoring::{BonusState, ScoreKeeper};

pub use crate::sim::{RandomBowler, RollPolicy, StrikeBias, UniformRolls};
