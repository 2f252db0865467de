//! Scoring state machine.
//!
//! `ScoreKeeper` is the only stateful type in the crate. It is mutated
//! exclusively through `roll`; everything else is a read-only view.

pub mod bonus;
pub mod keeper;

pub use bonus::BonusState;
pub use keeper::ScoreKeeper;
