//! Random bowler: plays whole games of legal rolls.
//!
//! Policies are trait-based so tests and benchmarks can pick how rolls are
//! drawn:
//! - `UniformRolls`: every legal value equally likely
//! - `StrikeBias`: clears the remaining pins with a fixed probability

use crate::core::{GameRng, RollError};
use crate::scoring::ScoreKeeper;

/// Chooses the next roll for a game in progress.
pub trait RollPolicy {
    /// Pick a value in `0..=max`, where `max` is the keeper's
    /// `max_next_roll()`.
    fn choose(&self, max: u32, rng: &mut GameRng) -> u32;
}

/// Every legal roll equally likely.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformRolls;

impl RollPolicy for UniformRolls {
    fn choose(&self, max: u32, rng: &mut GameRng) -> u32 {
        rng.pins_up_to(max)
    }
}

/// Knocks down every standing pin with `probability`, otherwise rolls
/// uniformly.
#[derive(Clone, Copy, Debug)]
pub struct StrikeBias {
    pub probability: f64,
}

impl StrikeBias {
    #[must_use]
    pub fn new(probability: f64) -> Self {
        Self { probability }
    }
}

impl RollPolicy for StrikeBias {
    fn choose(&self, max: u32, rng: &mut GameRng) -> u32 {
        if rng.gen_bool(self.probability) {
            max
        } else {
            rng.pins_up_to(max)
        }
    }
}

/// Seeded bowler driving a `ScoreKeeper` with legal rolls.
#[derive(Clone, Debug)]
pub struct RandomBowler<P: RollPolicy = UniformRolls> {
    rng: GameRng,
    policy: P,
}

impl RandomBowler<UniformRolls> {
    /// Uniform bowler with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_policy(seed, UniformRolls)
    }
}

impl<P: RollPolicy> RandomBowler<P> {
    /// Bowler with a custom policy.
    #[must_use]
    pub fn with_policy(seed: u64, policy: P) -> Self {
        Self {
            rng: GameRng::new(seed),
            policy,
        }
    }

    /// The next roll this bowler would make, or `None` once the game is over.
    pub fn next_roll(&mut self, keeper: &ScoreKeeper) -> Option<u32> {
        let max = keeper.max_next_roll()?;
        Some(self.policy.choose(max, &mut self.rng))
    }

    /// Roll until the game is over. Returns the number of rolls made.
    pub fn play_out(&mut self, keeper: &mut ScoreKeeper) -> Result<u32, RollError> {
        let mut rolls = 0;
        while let Some(pins) = self.next_roll(keeper) {
            // Out-of-range values come back from the keeper as InvalidRoll.
            keeper.roll(i32::try_from(pins).unwrap_or(i32::MAX))?;
            rolls += 1;
        }
        Ok(rolls)
    }

    /// Play a fresh standard game and return the finished keeper.
    pub fn play_game(&mut self) -> Result<ScoreKeeper, RollError> {
        let mut keeper = ScoreKeeper::new();
        self.play_out(&mut keeper)?;
        Ok(keeper)
    }

    /// Independent bowler for the next game in a batch.
    #[must_use]
    pub fn fork(&mut self) -> Self
    where
        P: Clone,
    {
        Self {
            rng: self.rng.fork(),
            policy: self.policy.clone(),
        }
    }
}
