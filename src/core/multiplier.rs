//! Score multipliers applied to a roll.

use serde::{Deserialize, Serialize};

/// How many times a roll's pins count toward the score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Multiplier {
    /// No bonus in effect.
    #[default]
    Single,
    /// Bonus roll after a spare or strike.
    Double,
    /// Strike stacked on an active bonus.
    Triple,
}

impl Multiplier {
    /// The numeric factor.
    #[must_use]
    pub const fn factor(self) -> u32 {
        match self {
            Multiplier::Single => 1,
            Multiplier::Double => 2,
            Multiplier::Triple => 3,
        }
    }

    /// Points a roll of `pins` is worth under this multiplier.
    #[must_use]
    pub const fn apply(self, pins: u32) -> u32 {
        pins * self.factor()
    }
}

impl std::fmt::Display for Multiplier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.factor())
    }
}
