//! Scoring configuration.
//!
//! A `ScoringConfig` fixes the shape of a game:
//! - `pins`: the most a single roll can knock down (a full clear)
//! - `frames`: how many two-round frames make up regulation play
//!
//! Everything else (the round limit, strike bonus sizes) is derived from
//! these two numbers. The defaults describe the standard ten-pin,
//! ten-frame game.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Rolls credited with a bonus after a strike in regulation play.
pub const STRIKE_BONUS_ROLLS: u32 = 2;

/// Rolls credited after a strike in the final frame.
pub const FINAL_STRIKE_BONUS_ROLLS: u32 = 3;

/// Rolls credited after clearing a frame with two rolls.
pub const SPARE_BONUS_ROLLS: u32 = 1;

/// Largest accepted pin count.
///
/// Keeps every roll representable as `i32` and the worst-case total
/// (every roll tripled) within `u32`.
pub const MAX_PINS: u32 = 1_000;

/// Largest accepted frame count.
pub const MAX_FRAMES: u32 = 100_000;

/// Game shape parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Pins standing at the start of a frame (default: 10).
    pub pins: u32,

    /// Frames in regulation play (default: 10).
    /// Each frame spans two rounds.
    pub frames: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            pins: 10,
            frames: 10,
        }
    }
}

impl ScoringConfig {
    /// Create the standard ten-pin, ten-frame configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pin count.
    #[must_use]
    pub fn with_pins(mut self, pins: u32) -> Self {
        self.pins = pins;
        self
    }

    /// Set the number of regulation frames.
    #[must_use]
    pub fn with_frames(mut self, frames: u32) -> Self {
        self.frames = frames;
        self
    }

    /// Check that the configuration describes a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pins == 0 {
            return Err(ConfigError::NoPins);
        }
        if self.frames == 0 {
            return Err(ConfigError::NoFrames);
        }
        if self.pins > MAX_PINS {
            return Err(ConfigError::TooManyPins {
                pins: self.pins,
                max: MAX_PINS,
            });
        }
        if self.frames > MAX_FRAMES {
            return Err(ConfigError::TooManyFrames {
                frames: self.frames,
                max: MAX_FRAMES,
            });
        }
        Ok(())
    }

    /// Rounds in regulation play (two per frame).
    #[must_use]
    pub const fn regulation_rounds(&self) -> u32 {
        self.frames * 2
    }

    /// Bonus rolls earned by a strike in `round`.
    ///
    /// Strikes from the second-to-last regulation round onward earn the
    /// larger final-frame bonus.
    #[must_use]
    pub const fn strike_bonus(&self, round: u32) -> u32 {
        if round + 1 < self.regulation_rounds() {
            STRIKE_BONUS_ROLLS
        } else {
            FINAL_STRIKE_BONUS_ROLLS
        }
    }
}
