//! Roll records and the frame view built from them.
//!
//! Every accepted roll produces a `RollRecord`. Records are kept in order
//! on the keeper and can be regrouped into `Frame`s:
//! - a strike closes its frame on its own
//! - otherwise an odd round and the following even round share a frame
//! - rolls past regulation play collect in one trailing bonus frame

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::ScoringConfig;
use super::multiplier::Multiplier;

/// One accepted roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RollRecord {
    /// Round the roll landed in (starts at 1).
    pub round: u32,

    /// Pins knocked down.
    pub pins: u32,

    /// Multiplier in effect for this roll.
    pub multiplier: Multiplier,

    /// Points added to the total (`pins * multiplier`).
    pub points: u32,

    /// Full clear on the first roll of a frame.
    pub strike: bool,
}

impl RollRecord {
    /// Create a record, computing points from pins and multiplier.
    #[must_use]
    pub fn new(round: u32, pins: u32, multiplier: Multiplier, strike: bool) -> Self {
        Self {
            round,
            pins,
            multiplier,
            points: multiplier.apply(pins),
            strike,
        }
    }

    /// Was this roll made past regulation play?
    #[must_use]
    pub fn is_bonus(&self, config: &ScoringConfig) -> bool {
        self.round > config.regulation_rounds()
    }
}

/// How a frame ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameKind {
    /// All pins on the first roll.
    Strike,
    /// All pins across two rolls.
    Spare,
    /// Pins left standing after two rolls.
    Open,
    /// Waiting for its second roll.
    Incomplete,
    /// Extra rolls after regulation play.
    Bonus,
}

/// Rolls grouped by frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// Frame number (starts at 1). The bonus frame is numbered one past
    /// the last regulation frame.
    pub number: u32,

    /// Pins per roll, in order.
    pub rolls: SmallVec<[u32; 3]>,

    /// Points the frame's rolls added to the total.
    pub points: u32,

    /// How the frame ended.
    pub kind: FrameKind,
}

impl Frame {
    fn start(number: u32, record: &RollRecord, kind: FrameKind) -> Self {
        let mut rolls = SmallVec::new();
        rolls.push(record.pins);
        Self {
            number,
            rolls,
            points: record.points,
            kind,
        }
    }

    fn push(&mut self, record: &RollRecord) {
        self.rolls.push(record.pins);
        self.points += record.points;
    }

    /// Total pins knocked down in this frame.
    #[must_use]
    pub fn pins(&self) -> u32 {
        self.rolls.iter().sum()
    }
}

/// Frame number a regulation round belongs to.
fn frame_number(round: u32) -> u32 {
    (round + 1) / 2
}

/// Group records into frames.
///
/// Rounds swallowed by rejected rolls leave gaps; a frame that lost its
/// second roll that way stays `Incomplete`, and a frame that lost its first
/// roll holds only the even-round roll.
#[must_use]
pub fn group_frames<'a, I>(records: I, config: &ScoringConfig) -> Vec<Frame>
where
    I: IntoIterator<Item = &'a RollRecord>,
{
    let mut frames: Vec<Frame> = Vec::new();
    let mut open: Option<Frame> = None;
    let mut bonus: Option<Frame> = None;

    for record in records {
        if record.is_bonus(config) {
            if let Some(frame) = open.take() {
                frames.push(frame);
            }
            if let Some(frame) = bonus.as_mut() {
                frame.push(record);
            } else {
                bonus = Some(Frame::start(config.frames + 1, record, FrameKind::Bonus));
            }
            continue;
        }

        let number = frame_number(record.round);
        if record.round % 2 == 1 {
            if let Some(frame) = open.take() {
                frames.push(frame);
            }
            if record.strike {
                frames.push(Frame::start(number, record, FrameKind::Strike));
            } else {
                open = Some(Frame::start(number, record, FrameKind::Incomplete));
            }
        } else {
            let mut frame = match open.take() {
                Some(mut frame) if frame.number == number => {
                    frame.push(record);
                    frame
                }
                stale => {
                    if let Some(frame) = stale {
                        frames.push(frame);
                    }
                    Frame::start(number, record, FrameKind::Open)
                }
            };
            frame.kind = if frame.rolls.len() == 2 && frame.pins() == config.pins {
                FrameKind::Spare
            } else {
                FrameKind::Open
            };
            frames.push(frame);
        }
    }

    frames.extend(open);
    frames.extend(bonus);
    frames
}
