use crate::models::{ExistingFragment, FinalDecision, SubmissionDraft};

/// Full admissibility decision over a draft and a corpus.
pub trait IValidator: Send + Sync {
    /// Score the draft, scan the corpus, and merge into a final verdict.
    fn validate(&self, draft: &SubmissionDraft, corpus: &[ExistingFragment]) -> FinalDecision;
}
