//! The scoring state machine.
//!
//! A `ScoreKeeper` takes rolls one at a time, rejects the ones the rules
//! forbid, and keeps the running total. Its full state is:
//! - the round counter (`rolls_taken + rounds_skipped`)
//! - the bonus state (pending bonus rolls, triple flag)
//! - the last roll made in an odd round
//!
//! ## Rounds
//!
//! Each frame spans an odd and an even round. A strike in an odd round
//! before the last regulation round also consumes the even round; that
//! extra step is counted in `rounds_skipped`, never in `rolls_taken`.
//!
//! ## Rejected rolls
//!
//! Once the game-over check passes, the round counter advances before the
//! roll is validated. A roll rejected for its value or for overflowing the
//! frame still uses up its round.
//!
//! ## Example
//!
//! ```
//! use rust_bowling::ScoreKeeper;
//!
//! let mut keeper = ScoreKeeper::new();
//! keeper.roll(5).unwrap();
//! keeper.roll(5).unwrap(); // spare: next roll counts double
//! keeper.roll(3).unwrap();
//! assert_eq!(keeper.points(), 16);
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::bonus::BonusState;
use crate::core::config::FINAL_STRIKE_BONUS_ROLLS;
use crate::core::{
    group_frames, ConfigError, Frame, RollError, RollRecord, ScoringConfig, SnapshotError,
};

/// Score and round tracking for one game.
///
/// Deserializing goes through `ScoreKeeperSnapshot`, so a restored keeper
/// satisfies the same invariants as one built by rolling.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ScoreKeeperSnapshot")]
pub struct ScoreKeeper {
    config: ScoringConfig,
    total_points: u32,
    rolls_taken: u32,
    rounds_skipped: u32,
    bonus: BonusState,
    last_odd_roll: u32,
    history: Vector<RollRecord>,
}

/// Unchecked field layout of a serialized `ScoreKeeper`.
#[derive(Deserialize)]
struct ScoreKeeperSnapshot {
    config: ScoringConfig,
    total_points: u32,
    rolls_taken: u32,
    rounds_skipped: u32,
    bonus: BonusState,
    last_odd_roll: u32,
    history: Vector<RollRecord>,
}

impl TryFrom<ScoreKeeperSnapshot> for ScoreKeeper {
    type Error = SnapshotError;

    fn try_from(snapshot: ScoreKeeperSnapshot) -> Result<Self, Self::Error> {
        let config = snapshot.config;
        config.validate()?;

        let max = config.pins;
        if snapshot.bonus.pending > FINAL_STRIKE_BONUS_ROLLS {
            return Err(SnapshotError::TooManyBonusRolls {
                pending: snapshot.bonus.pending,
                max: FINAL_STRIKE_BONUS_ROLLS,
            });
        }
        if snapshot.last_odd_roll > max {
            return Err(SnapshotError::LastOddOutOfRange {
                value: snapshot.last_odd_roll,
                max,
            });
        }

        let rounds = u64::from(snapshot.rolls_taken) + u64::from(snapshot.rounds_skipped);
        let mut previous = 0;
        let mut recorded = 0u64;
        let mut skipping_strikes = 0;
        for record in &snapshot.history {
            if record.pins > max {
                return Err(SnapshotError::PinsOutOfRange {
                    round: record.round,
                    pins: record.pins,
                    max,
                });
            }
            if record.points != record.multiplier.apply(record.pins) {
                return Err(SnapshotError::PointsMismatch {
                    round: record.round,
                    pins: record.pins,
                    multiplier: record.multiplier.factor(),
                    points: record.points,
                });
            }
            if record.round <= previous || u64::from(record.round) > rounds {
                return Err(SnapshotError::RoundsOutOfOrder {
                    round: record.round,
                    rounds: snapshot.rolls_taken.saturating_add(snapshot.rounds_skipped),
                });
            }
            if record.strike && record.round < config.regulation_rounds() {
                skipping_strikes += 1;
            }
            previous = record.round;
            recorded += u64::from(record.points);
        }

        if recorded != u64::from(snapshot.total_points) {
            return Err(SnapshotError::TotalMismatch {
                total: u64::from(snapshot.total_points),
                recorded,
            });
        }
        if snapshot.rounds_skipped > skipping_strikes {
            return Err(SnapshotError::SkipsWithoutStrikes {
                skipped: snapshot.rounds_skipped,
                strikes: skipping_strikes,
            });
        }

        Ok(Self {
            config,
            total_points: snapshot.total_points,
            rolls_taken: snapshot.rolls_taken,
            rounds_skipped: snapshot.rounds_skipped,
            bonus: snapshot.bonus,
            last_odd_roll: snapshot.last_odd_roll,
            history: snapshot.history,
        })
    }
}

impl Default for ScoreKeeper {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreKeeper {
    /// Start a standard ten-frame game.
    #[must_use]
    pub fn new() -> Self {
        Self::from_valid_config(ScoringConfig::default())
    }

    /// Start a game with a custom shape.
    pub fn with_config(config: ScoringConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: ScoringConfig) -> Self {
        Self {
            config,
            total_points: 0,
            rolls_taken: 0,
            rounds_skipped: 0,
            bonus: BonusState::default(),
            last_odd_roll: 0,
            history: Vector::new(),
        }
    }

    // === Rolling ===

    /// Record a roll of `value` pins.
    ///
    /// Checks, in order: game over (nothing changes), then advances the
    /// round, then the value range, then the frame total. On success the
    /// roll's record is returned and appended to the history.
    pub fn roll(&mut self, value: i32) -> Result<RollRecord, RollError> {
        if self.is_over() {
            return Err(self.reject(RollError::GameOver { rounds: self.rounds() }));
        }

        self.rolls_taken += 1;
        let round = self.rounds();
        let max = self.config.pins;

        let pins = match u32::try_from(value) {
            Ok(pins) if pins <= max => pins,
            _ => return Err(self.reject(RollError::InvalidRoll { value, max })),
        };

        let odd = round % 2 == 1;
        if !odd && self.last_odd_roll < max && self.last_odd_roll + pins > max {
            return Err(self.reject(RollError::FrameOverflow {
                first: self.last_odd_roll,
                second: pins,
                pins: max,
            }));
        }
        if odd {
            self.last_odd_roll = pins;
        }

        let multiplier = self.bonus.multiplier(round, &self.config);
        let strike = odd && pins == max;

        if !odd {
            self.bonus.after_even(self.last_odd_roll + pins == max);
        } else if strike {
            if self.bonus.after_strike(round, &self.config) {
                self.rounds_skipped += 1;
            }
        } else {
            self.bonus.after_open();
        }

        let record = RollRecord::new(round, pins, multiplier, strike);
        self.total_points += record.points;
        self.history.push_back(record);

        debug!(
            round,
            pins,
            multiplier = %multiplier,
            total = self.total_points,
            pending = self.bonus.pending,
            "roll accepted"
        );

        Ok(record)
    }

    fn reject(&self, err: RollError) -> RollError {
        debug!(round = self.rounds(), error = %err, "roll rejected");
        err
    }

    // === Game Progress ===

    /// Has the game concluded?
    ///
    /// Pending bonus rolls push the end past regulation play.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.rounds() >= self.config.regulation_rounds() + self.bonus.pending
    }

    /// Total points scored.
    #[must_use]
    pub fn points(&self) -> u32 {
        self.total_points
    }

    /// Rounds used so far, including rounds skipped by strikes and
    /// rounds used up by rejected rolls.
    #[must_use]
    pub fn rounds(&self) -> u32 {
        self.rolls_taken + self.rounds_skipped
    }

    /// Round the next roll would land in.
    #[must_use]
    pub fn next_round(&self) -> u32 {
        self.rounds() + 1
    }

    /// Roll calls that advanced the round counter.
    #[must_use]
    pub fn rolls_taken(&self) -> u32 {
        self.rolls_taken
    }

    /// Extra rounds consumed by strikes.
    #[must_use]
    pub fn rounds_skipped(&self) -> u32 {
        self.rounds_skipped
    }

    // === Bonus State ===

    /// Upcoming rolls eligible for a multiplier.
    #[must_use]
    pub fn pending_bonus_rolls(&self) -> u32 {
        self.bonus.pending
    }

    /// Will the next roll count triple?
    #[must_use]
    pub fn is_triple_active(&self) -> bool {
        self.bonus.triple
    }

    /// Pins on the most recent odd-round roll.
    #[must_use]
    pub fn last_odd_roll(&self) -> u32 {
        self.last_odd_roll
    }

    /// Shape of the game being scored.
    #[must_use]
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    // === History ===

    /// Accepted rolls, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<RollRecord> {
        &self.history
    }

    /// Accepted rolls grouped by frame.
    #[must_use]
    pub fn frames(&self) -> Vec<Frame> {
        group_frames(&self.history, &self.config)
    }

    // === Legal Rolls ===

    /// Largest value the next roll may take, or `None` once the game is over.
    #[must_use]
    pub fn max_next_roll(&self) -> Option<u32> {
        if self.is_over() {
            return None;
        }
        let pins = self.config.pins;
        if self.next_round() % 2 == 0 && self.last_odd_roll < pins {
            Some(pins - self.last_odd_roll)
        } else {
            Some(pins)
        }
    }

    /// Every value the next roll may take. Empty once the game is over.
    pub fn legal_rolls(&self) -> impl Iterator<Item = u32> {
        self.max_next_roll().into_iter().flat_map(|max| 0..=max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Multiplier;

    fn roll_all(keeper: &mut ScoreKeeper, rolls: &[i32]) {
        for &pins in rolls {
            keeper.roll(pins).unwrap();
        }
    }

    #[test]
    fn test_new_keeper() {
        let keeper = ScoreKeeper::new();
        assert_eq!(keeper.points(), 0);
        assert_eq!(keeper.rounds(), 0);
        assert_eq!(keeper.pending_bonus_rolls(), 0);
        assert!(!keeper.is_triple_active());
        assert!(!keeper.is_over());
        assert!(keeper.history().is_empty());
        assert_eq!(keeper, ScoreKeeper::default());
    }

    #[test]
    fn test_with_config_validates() {
        assert!(ScoreKeeper::with_config(ScoringConfig::new().with_pins(0)).is_err());

        let keeper = ScoreKeeper::with_config(ScoringConfig::new().with_frames(2)).unwrap();
        assert_eq!(keeper.config().regulation_rounds(), 4);
    }

    #[test]
    fn test_roll_returns_record() {
        let mut keeper = ScoreKeeper::new();
        let record = keeper.roll(7).unwrap();

        assert_eq!(record.round, 1);
        assert_eq!(record.pins, 7);
        assert_eq!(record.multiplier, Multiplier::Single);
        assert_eq!(record.points, 7);
        assert!(!record.strike);
        assert_eq!(keeper.last_odd_roll(), 7);
    }

    #[test]
    fn test_invalid_roll_still_advances_round() {
        let mut keeper = ScoreKeeper::new();

        assert_eq!(keeper.roll(11), Err(RollError::InvalidRoll { value: 11, max: 10 }));
        assert_eq!(keeper.rounds(), 1);

        assert_eq!(keeper.roll(-1), Err(RollError::InvalidRoll { value: -1, max: 10 }));
        assert_eq!(keeper.rounds(), 2);

        assert_eq!(keeper.points(), 0);
        assert!(keeper.history().is_empty());
    }

    #[test]
    fn test_frame_overflow_still_advances_round() {
        let mut keeper = ScoreKeeper::new();
        keeper.roll(5).unwrap();

        let err = keeper.roll(6).unwrap_err();
        assert_eq!(err, RollError::FrameOverflow { first: 5, second: 6, pins: 10 });
        assert_eq!(keeper.rounds(), 2);
        assert_eq!(keeper.points(), 5);
    }

    #[test]
    fn test_game_over_leaves_state_untouched() {
        let mut keeper = ScoreKeeper::new();
        roll_all(&mut keeper, &[0; 20]);
        assert!(keeper.is_over());

        let before = keeper.clone();
        assert_eq!(keeper.roll(-5), Err(RollError::GameOver { rounds: 20 }));
        assert_eq!(keeper, before);
    }

    #[test]
    fn test_strike_skips_round() {
        let mut keeper = ScoreKeeper::new();
        let record = keeper.roll(10).unwrap();

        assert!(record.strike);
        assert_eq!(keeper.rounds(), 2);
        assert_eq!(keeper.rolls_taken(), 1);
        assert_eq!(keeper.rounds_skipped(), 1);
        assert_eq!(keeper.pending_bonus_rolls(), 2);
        assert!(!keeper.is_triple_active());
    }

    #[test]
    fn test_consecutive_strikes_triple() {
        let mut keeper = ScoreKeeper::new();
        keeper.roll(10).unwrap();

        let second = keeper.roll(10).unwrap();
        assert_eq!(second.multiplier, Multiplier::Double);
        assert!(keeper.is_triple_active());

        let third = keeper.roll(3).unwrap();
        assert_eq!(third.multiplier, Multiplier::Triple);
        assert_eq!(third.points, 9);
        assert!(!keeper.is_triple_active());
        assert_eq!(keeper.pending_bonus_rolls(), 1);

        let fourth = keeper.roll(4).unwrap();
        assert_eq!(fourth.multiplier, Multiplier::Double);
        assert_eq!(keeper.points(), 10 + 20 + 9 + 8);
    }

    #[test]
    fn test_spare_in_last_frame_extends_game() {
        let mut keeper = ScoreKeeper::new();
        roll_all(&mut keeper, &[0; 18]);
        roll_all(&mut keeper, &[4, 6]);

        assert_eq!(keeper.rounds(), 20);
        assert_eq!(keeper.pending_bonus_rolls(), 1);
        assert!(!keeper.is_over());

        let bonus = keeper.roll(7).unwrap();
        assert_eq!(bonus.multiplier, Multiplier::Single);
        assert!(keeper.is_over());
        assert_eq!(keeper.points(), 17);
    }

    #[test]
    fn test_bonus_frame_checked_against_strike() {
        let mut keeper = ScoreKeeper::new();
        // Frame 9 leaves a 7 as the last open odd roll.
        roll_all(&mut keeper, &[0; 16]);
        roll_all(&mut keeper, &[7, 1]);
        keeper.roll(10).unwrap();
        keeper.roll(10).unwrap();

        // The bonus frame's first roll was a strike, so anything goes.
        assert_eq!(keeper.max_next_roll(), Some(10));
        keeper.roll(5).unwrap();
        assert!(keeper.is_over());
    }

    #[test]
    fn test_max_next_roll() {
        let mut keeper = ScoreKeeper::new();
        assert_eq!(keeper.max_next_roll(), Some(10));

        keeper.roll(3).unwrap();
        assert_eq!(keeper.max_next_roll(), Some(7));
        assert_eq!(keeper.legal_rolls().collect::<Vec<_>>(), (0..=7).collect::<Vec<_>>());

        keeper.roll(7).unwrap();
        assert_eq!(keeper.max_next_roll(), Some(10));
    }

    #[test]
    fn test_no_legal_rolls_after_game() {
        let mut keeper = ScoreKeeper::new();
        roll_all(&mut keeper, &[0; 20]);

        assert_eq!(keeper.max_next_roll(), None);
        assert_eq!(keeper.legal_rolls().count(), 0);
    }

    #[test]
    fn test_frames_view() {
        let mut keeper = ScoreKeeper::new();
        roll_all(&mut keeper, &[10, 5, 5, 3, 2]);

        let frames = keeper.frames();
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].points, 10);
        assert_eq!(frames[1].points, 20);
        assert_eq!(frames[2].points, 8);
        assert_eq!(frames.iter().map(|f| f.points).sum::<u32>(), keeper.points());
    }

    #[test]
    fn test_short_game_config() {
        let mut keeper = ScoreKeeper::with_config(ScoringConfig::new().with_pins(5).with_frames(2)).unwrap();

        keeper.roll(5).unwrap();
        // Strike in round 1 of a 4-round game.
        assert_eq!(keeper.pending_bonus_rolls(), 2);
        assert_eq!(keeper.rounds(), 2);

        assert!(keeper.roll(6).is_err());
        assert_eq!(keeper.rounds(), 3);
    }

    #[test]
    fn test_with_config_rejects_oversized_game() {
        let err = ScoreKeeper::with_config(ScoringConfig::new().with_frames(u32::MAX / 2 + 1)).unwrap_err();
        assert!(matches!(err, ConfigError::TooManyFrames { .. }));

        let err = ScoreKeeper::with_config(ScoringConfig::new().with_pins(u32::MAX)).unwrap_err();
        assert!(matches!(err, ConfigError::TooManyPins { .. }));
    }

    #[test]
    fn test_largest_game_does_not_overflow() {
        let config = ScoringConfig::new().with_pins(crate::core::config::MAX_PINS).with_frames(1);
        let mut keeper = ScoreKeeper::with_config(config).unwrap();

        while !keeper.is_over() {
            keeper.roll(config.pins as i32).unwrap();
        }
        assert!(keeper.points() > 0);
    }

    fn snapshot_json(keeper: &ScoreKeeper) -> serde_json::Value {
        serde_json::to_value(keeper).unwrap()
    }

    #[test]
    fn test_snapshot_rejects_invalid_config() {
        let mut json = snapshot_json(&ScoreKeeper::new());
        json["config"]["pins"] = 0.into();
        json["config"]["frames"] = 0.into();

        let err = serde_json::from_value::<ScoreKeeper>(json).unwrap_err();
        assert!(err.to_string().contains("at least one pin"));
    }

    #[test]
    fn test_snapshot_rejects_total_mismatch() {
        let mut keeper = ScoreKeeper::new();
        roll_all(&mut keeper, &[4, 5]);

        let mut json = snapshot_json(&keeper);
        json["total_points"] = 100.into();
        let err = serde_json::from_value::<ScoreKeeper>(json).unwrap_err();
        assert!(err.to_string().contains("does not match"));
    }

    #[test]
    fn test_snapshot_rejects_inconsistent_fields() {
        let mut keeper = ScoreKeeper::new();
        roll_all(&mut keeper, &[4, 5]);

        let mut pending = snapshot_json(&keeper);
        pending["bonus"]["pending"] = 9.into();
        assert!(serde_json::from_value::<ScoreKeeper>(pending).is_err());

        let mut skipped = snapshot_json(&keeper);
        skipped["rounds_skipped"] = 1.into();
        assert!(serde_json::from_value::<ScoreKeeper>(skipped).is_err());

        let mut points = snapshot_json(&keeper);
        points["history"][0]["points"] = 8.into();
        points["total_points"] = 13.into();
        assert!(serde_json::from_value::<ScoreKeeper>(points).is_err());

        let mut rounds = snapshot_json(&keeper);
        rounds["rolls_taken"] = 1.into();
        assert!(serde_json::from_value::<ScoreKeeper>(rounds).is_err());
    }

    #[test]
    fn test_snapshot_serde() {
        let mut keeper = ScoreKeeper::new();
        roll_all(&mut keeper, &[10, 4, 6, 2]);

        let json = serde_json::to_string(&keeper).unwrap();
        let restored: ScoreKeeper = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, keeper);
    }
}
