use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::constants::{MAX_SCORE, MIN_SCORE};

/// Quality score clamped to [0, 100].
///
/// Rule arithmetic happens in raw `i32` space and may leave [0, 100];
/// clamping happens exactly once, at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Score(u8);

impl Score {
    /// Every rule delta is applied against this baseline.
    pub const BASELINE: i32 = 50;
    /// Minimum final score required before a submission can be accepted.
    pub const PASS: u8 = 70;
    /// Scores at or above this threshold require zero stake.
    pub const HIGH_QUALITY: u8 = 90;
    /// The degraded score returned when rule evaluation fails.
    pub const FALLBACK: Score = Score(50);

    /// Build a score from raw rule arithmetic, clamping to [0, 100].
    pub fn from_raw(raw: i32) -> Self {
        Self(raw.clamp(MIN_SCORE, MAX_SCORE) as u8)
    }

    /// Get the raw value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Whether this score alone clears the submission threshold.
    pub fn is_passing(self) -> bool {
        self.0 >= Self::PASS
    }

    /// Whether this score qualifies for zero-stake submission.
    pub fn is_high_quality(self) -> bool {
        self.0 >= Self::HIGH_QUALITY
    }
}

impl Default for Score {
    fn default() -> Self {
        Self(Self::BASELINE as u8)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Score> for u8 {
    fn from(s: Score) -> Self {
        s.0
    }
}
