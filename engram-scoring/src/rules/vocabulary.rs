//! Lexicon containment rules: personal, temporal, emotional, promotional.
//!
//! Matching is case-insensitive. Single-word terms match as whole tokens
//! (content split on non-alphanumeric boundaries); multi-word terms match
//! as substrings of the case-folded content. Each term counts at most once
//! per category, however often it occurs.

use std::collections::HashSet;

use engram_core::config::LexiconConfig;
use engram_core::models::SubmissionDraft;
use engram_core::EngramResult;

use super::RuleOutcome;

/// Distinct personal terms required for the rich-vocabulary bonus.
pub const PERSONAL_RICH_COUNT: usize = 3;

pub const DELTA_PERSONAL_RICH: i32 = 15;
pub const DELTA_PERSONAL_MISSING: i32 = -25;
pub const DELTA_TEMPORAL_PRESENT: i32 = 10;
pub const DELTA_EMOTIONAL_PRESENT: i32 = 15;
pub const DELTA_PROMOTIONAL: i32 = -50;

/// Count how many lexicon terms appear in the content.
pub fn term_count(content: &str, terms: &[String]) -> usize {
    let lowered = content.to_lowercase();
    let tokens: HashSet<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();

    terms
        .iter()
        .filter(|term| {
            if term.contains(char::is_whitespace) {
                lowered.contains(term.as_str())
            } else {
                tokens.contains(term.as_str())
            }
        })
        .count()
}

pub fn personal(draft: &SubmissionDraft, lexicons: &LexiconConfig) -> EngramResult<RuleOutcome> {
    let count = term_count(&draft.content, &lexicons.personal);
    Ok(if count >= PERSONAL_RICH_COUNT {
        RuleOutcome::indicator(DELTA_PERSONAL_RICH, "Personal vocabulary present")
    } else if count == 0 {
        RuleOutcome::issue(
            DELTA_PERSONAL_MISSING,
            "Missing personal-reference vocabulary",
        )
    } else {
        RuleOutcome::default()
    })
}

pub fn temporal(draft: &SubmissionDraft, lexicons: &LexiconConfig) -> EngramResult<RuleOutcome> {
    let count = term_count(&draft.content, &lexicons.temporal);
    Ok(if count > 0 {
        RuleOutcome::indicator(DELTA_TEMPORAL_PRESENT, "Temporal element present")
    } else {
        RuleOutcome::suggestion("Add temporal descriptors, such as when it happened")
    })
}

pub fn emotional(draft: &SubmissionDraft, lexicons: &LexiconConfig) -> EngramResult<RuleOutcome> {
    let count = term_count(&draft.content, &lexicons.emotional);
    Ok(if count > 0 {
        RuleOutcome::indicator(DELTA_EMOTIONAL_PRESENT, "Emotional description present")
    } else {
        RuleOutcome::suggestion("Add emotional descriptors to bring the memory to life")
    })
}

pub fn promotional(draft: &SubmissionDraft, lexicons: &LexiconConfig) -> EngramResult<RuleOutcome> {
    let count = term_count(&draft.content, &lexicons.promotional);
    Ok(if count > 0 {
        RuleOutcome::issue(DELTA_PROMOTIONAL, "Content may contain promotional material")
    } else {
        RuleOutcome::default()
    })
}
