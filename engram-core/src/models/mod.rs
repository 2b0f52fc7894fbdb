mod final_decision;
mod score;
mod score_report;
mod similarity_report;
mod submission;

pub use final_decision::FinalDecision;
pub use score::Score;
pub use score_report::ScoreReport;
pub use similarity_report::{SimilarMatch, SimilarityReport};
pub use submission::{ExistingFragment, SubmissionDraft};
