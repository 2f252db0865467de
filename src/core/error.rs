//! Error types returned by the scoring engine.

/// Reasons a roll is rejected.
///
/// None of these are recoverable by the keeper itself; a caller that
/// receives one should stop feeding rolls for that game.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RollError {
    #[error("cannot roll {value} points: a roll must be between 0 and {max}")]
    InvalidRoll { value: i32, max: u32 },

    #[error("frame overflow: {first} + {second} exceeds {pins} pins")]
    FrameOverflow { first: u32, second: u32, pins: u32 },

    #[error("game is over after {rounds} rounds")]
    GameOver { rounds: u32 },
}

/// Reasons a `ScoringConfig` cannot describe a game.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("a game needs at least one pin")]
    NoPins,

    #[error("a game needs at least one frame")]
    NoFrames,

    #[error("{pins} pins exceeds the limit of {max}")]
    TooManyPins { pins: u32, max: u32 },

    #[error("{frames} frames exceeds the limit of {max}")]
    TooManyFrames { frames: u32, max: u32 },
}

/// Reasons a serialized `ScoreKeeper` cannot be restored.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),

    #[error("roll in round {round} knocked down {pins} of {max} pins")]
    PinsOutOfRange { round: u32, pins: u32, max: u32 },

    #[error("roll in round {round} records {points} points for {pins} pins at x{multiplier}")]
    PointsMismatch { round: u32, pins: u32, multiplier: u32, points: u32 },

    #[error("history rounds out of order at round {round} (counter at {rounds})")]
    RoundsOutOfOrder { round: u32, rounds: u32 },

    #[error("total of {total} points does not match {recorded} in history")]
    TotalMismatch { total: u64, recorded: u64 },

    #[error("{skipped} skipped rounds but only {strikes} strikes")]
    SkipsWithoutStrikes { skipped: u32, strikes: u32 },

    #[error("{pending} pending bonus rolls exceeds the limit of {max}")]
    TooManyBonusRolls { pending: u32, max: u32 },

    #[error("last odd roll of {value} exceeds {max} pins")]
    LastOddOutOfRange { value: u32, max: u32 },
}
