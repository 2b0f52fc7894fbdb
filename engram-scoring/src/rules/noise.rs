//! Character-run noise rule: long runs of one character are keyboard mash.

use engram_core::config::LexiconConfig;
use engram_core::models::SubmissionDraft;
use engram_core::EngramResult;

use super::RuleOutcome;

/// Run length at which consecutive identical characters count as noise.
pub const NOISE_RUN_LEN: usize = 5;

pub const DELTA_NOISE: i32 = -30;

pub fn evaluate(draft: &SubmissionDraft, _lexicons: &LexiconConfig) -> EngramResult<RuleOutcome> {
    Ok(if has_repeated_run(&draft.content, NOISE_RUN_LEN) {
        RuleOutcome::issue(DELTA_NOISE, "Contains repeated characters, possibly noise")
    } else {
        RuleOutcome::default()
    })
}

/// Whether any character repeats at least `run` times consecutively.
fn has_repeated_run(text: &str, run: usize) -> bool {
    let mut prev: Option<char> = None;
    let mut current = 0usize;
    for c in text.chars() {
        if prev == Some(c) {
            current += 1;
        } else {
            prev = Some(c);
            current = 1;
        }
        if current >= run {
            return true;
        }
    }
    false
}
