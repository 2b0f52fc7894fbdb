//! Stake sizing: the economic gate the settlement layer applies to the
//! engine's score. Lower quality requires a larger stake, capped; a
//! high-quality score stakes nothing. Pure function of the score.

use engram_core::models::Score;

/// Stake sizing policy.
#[derive(Debug, Clone)]
pub struct StakePolicy {
    /// Scores at or above this threshold require zero stake.
    pub high_quality_threshold: u8,
    /// Stake units per point of quality deficit below 100.
    pub stake_per_point: u64,
    /// Hard cap on the required stake.
    pub max_stake: u64,
}

impl Default for StakePolicy {
    fn default() -> Self {
        Self {
            high_quality_threshold: Score::HIGH_QUALITY,
            stake_per_point: 10,
            max_stake: 500,
        }
    }
}

impl StakePolicy {
    /// Required stake, in settlement-layer units, for a given score.
    pub fn required_stake(&self, score: Score) -> u64 {
        if score.value() >= self.high_quality_threshold {
            return 0;
        }
        let deficit = u64::from(100 - score.value());
        (deficit * self.stake_per_point).min(self.max_stake)
    }
}
