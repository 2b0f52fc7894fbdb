use crate::models::{ScoreReport, SubmissionDraft};

/// Rule-table quality scoring.
pub trait IScorer: Send + Sync {
    /// Score a draft against the rule table.
    ///
    /// Infallible by contract: internal failures degrade to the fallback
    /// report rather than surfacing as errors.
    fn evaluate(&self, draft: &SubmissionDraft) -> ScoreReport;
}
