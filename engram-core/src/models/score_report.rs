use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::score::Score;

/// Result of rule-table scoring for a single draft.
/// Value object, created fresh per evaluation.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreReport {
    /// Clamped quality score.
    pub score: Score,
    /// Problems that subtracted from the score, in rule order.
    pub issues: Vec<String>,
    /// Zero-delta advice for improving the draft.
    pub suggestions: Vec<String>,
    /// Positive quality markers that added to the score.
    pub indicators: Vec<String>,
}

impl ScoreReport {
    /// Degraded report returned when rule evaluation cannot complete.
    ///
    /// Fail-open-but-flagged: the fixed score (50) sits below the pass
    /// threshold (70), so an internal failure never silently admits a
    /// submission, and the generic issue keeps the degradation visible
    /// to the caller.
    pub fn fallback() -> Self {
        Self {
            score: Score::FALLBACK,
            issues: vec!["Quality evaluation could not be completed".to_string()],
            suggestions: vec!["Revise the memory and submit it again".to_string()],
            indicators: Vec::new(),
        }
    }
}
