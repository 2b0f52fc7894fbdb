//! The scoring rule table.
//!
//! Each rule is a pure function over the draft and the lexicons, returning
//! the score delta it contributes plus any diagnostics. Rules are
//! independent of each other; the engine sums their deltas against
//! `Score::BASELINE` and clamps once at the end.

pub mod length;
pub mod noise;
pub mod tags;
pub mod title;
pub mod vocabulary;

use engram_core::config::LexiconConfig;
use engram_core::models::SubmissionDraft;
use engram_core::EngramResult;

/// Contribution of a single rule: a score delta plus diagnostics.
#[derive(Debug, Clone, Default)]
pub struct RuleOutcome {
    pub delta: i32,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
    pub indicators: Vec<String>,
}

impl RuleOutcome {
    /// A negative finding with its delta.
    pub fn issue(delta: i32, message: impl Into<String>) -> Self {
        Self {
            delta,
            issues: vec![message.into()],
            ..Default::default()
        }
    }

    /// A positive finding with its delta.
    pub fn indicator(delta: i32, message: impl Into<String>) -> Self {
        Self {
            delta,
            indicators: vec![message.into()],
            ..Default::default()
        }
    }

    /// Zero-delta advice.
    pub fn suggestion(message: impl Into<String>) -> Self {
        Self {
            suggestions: vec![message.into()],
            ..Default::default()
        }
    }
}

/// A single entry in the rule table.
pub type RuleFn = fn(&SubmissionDraft, &LexiconConfig) -> EngramResult<RuleOutcome>;

/// The fixed rule table, in evaluation order.
///
/// Diagnostic ordering in the final report follows this order.
pub fn default_rules() -> Vec<RuleFn> {
    vec![
        length::evaluate,
        title::evaluate,
        vocabulary::personal,
        vocabulary::temporal,
        vocabulary::emotional,
        vocabulary::promotional,
        noise::evaluate,
        tags::evaluate,
    ]
}
