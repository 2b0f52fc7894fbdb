//! Tag presence rule. Blank tags are treated as absent.

use engram_core::config::LexiconConfig;
use engram_core::models::SubmissionDraft;
use engram_core::EngramResult;

use super::RuleOutcome;

pub const DELTA_TAGS_PRESENT: i32 = 5;

pub fn evaluate(draft: &SubmissionDraft, _lexicons: &LexiconConfig) -> EngramResult<RuleOutcome> {
    let has_tags = draft.tags.iter().any(|t| !t.trim().is_empty());
    Ok(if has_tags {
        RuleOutcome::indicator(DELTA_TAGS_PRESENT, "Relevant tags present")
    } else {
        RuleOutcome::default()
    })
}
