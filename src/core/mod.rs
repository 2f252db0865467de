//! Core value types: configuration, errors, multipliers, roll records, RNG.
//!
//! Nothing here holds game state. The keeper in `scoring` is built from
//! these pieces.

pub mod config;
pub mod error;
pub mod multiplier;
pub mod record;
pub mod rng;

pub use config::ScoringConfig;
pub use error::{ConfigError, RollError, SnapshotError};
pub use multiplier::Multiplier;
pub use record::{group_frames, Frame, FrameKind, RollRecord};
pub use rng::GameRng;
