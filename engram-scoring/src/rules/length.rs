//! Content length rules. Length is measured in Unicode scalar values.

use engram_core::config::LexiconConfig;
use engram_core::models::SubmissionDraft;
use engram_core::EngramResult;

use super::RuleOutcome;

/// Minimum character count before content is penalized as too short.
pub const MIN_CONTENT_CHARS: usize = 20;
/// Character count above which content earns the detailed-content bonus.
pub const DETAILED_CONTENT_CHARS: usize = 50;

pub const DELTA_TOO_SHORT: i32 = -20;
pub const DELTA_DETAILED: i32 = 10;

pub fn evaluate(draft: &SubmissionDraft, _lexicons: &LexiconConfig) -> EngramResult<RuleOutcome> {
    let chars = draft.content.chars().count();
    Ok(if chars < MIN_CONTENT_CHARS {
        RuleOutcome::issue(DELTA_TOO_SHORT, "Content is too short")
    } else if chars > DETAILED_CONTENT_CHARS {
        RuleOutcome::indicator(DELTA_DETAILED, "Content is detailed")
    } else {
        RuleOutcome::default()
    })
}
