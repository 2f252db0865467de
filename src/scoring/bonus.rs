//! Bonus bookkeeping: how many upcoming rolls count double, and whether
//! the next one counts triple.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::config::{ScoringConfig, SPARE_BONUS_ROLLS};
use crate::core::Multiplier;

/// Pending bonus rolls plus the triple flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BonusState {
    /// Upcoming rolls eligible for a multiplier. Also extends the game
    /// past regulation play.
    pub pending: u32,

    /// Next scoring roll counts triple.
    pub triple: bool,
}

impl BonusState {
    /// Multiplier for a roll landing in `round`.
    ///
    /// The triple flag applies in any round; doubling stops after
    /// regulation play.
    #[must_use]
    pub fn multiplier(&self, round: u32, config: &ScoringConfig) -> Multiplier {
        if self.triple {
            Multiplier::Triple
        } else if self.pending > 0 && round <= config.regulation_rounds() {
            Multiplier::Double
        } else {
            Multiplier::Single
        }
    }

    /// Second roll of a frame. A cleared frame earns one bonus roll.
    pub fn after_even(&mut self, cleared: bool) {
        self.pending = if cleared { SPARE_BONUS_ROLLS } else { 0 };
        self.triple = false;
        trace!(pending = self.pending, cleared, "bonus after frame");
    }

    /// Strike on the first roll of a frame.
    ///
    /// Returns true when the strike also consumes the frame's second
    /// round. Strikes past regulation play leave the bonus untouched.
    pub fn after_strike(&mut self, round: u32, config: &ScoringConfig) -> bool {
        let regulation = config.regulation_rounds();
        if round > regulation {
            return false;
        }
        self.triple = self.pending > 0;
        self.pending = config.strike_bonus(round);
        trace!(pending = self.pending, triple = self.triple, round, "bonus after strike");
        round < regulation
    }

    /// First roll of a frame that left pins standing.
    pub fn after_open(&mut self) {
        self.pending = self.pending.saturating_sub(1);
        self.triple = false;
    }
}
