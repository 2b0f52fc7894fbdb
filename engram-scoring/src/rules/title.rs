//! Title presence rule. A missing title is an empty string, not an error.

use engram_core::config::LexiconConfig;
use engram_core::models::SubmissionDraft;
use engram_core::EngramResult;

use super::RuleOutcome;

/// Minimum character count (after trimming) for a usable title.
pub const MIN_TITLE_CHARS: usize = 3;

pub const DELTA_TITLE_MISSING: i32 = -15;
pub const DELTA_TITLE_PRESENT: i32 = 5;

pub fn evaluate(draft: &SubmissionDraft, _lexicons: &LexiconConfig) -> EngramResult<RuleOutcome> {
    let chars = draft.title.trim().chars().count();
    Ok(if chars < MIN_TITLE_CHARS {
        RuleOutcome::issue(DELTA_TITLE_MISSING, "Title is missing or too short")
    } else {
        RuleOutcome::indicator(DELTA_TITLE_PRESENT, "Explicit title present")
    })
}
