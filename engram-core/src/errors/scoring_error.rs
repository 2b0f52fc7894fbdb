/// Internal failures inside rule evaluation.
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("rule '{rule}' failed: {reason}")]
    RuleFailed { rule: String, reason: String },

    #[error("lexicon category '{category}' is empty")]
    EmptyLexicon { category: String },
}
