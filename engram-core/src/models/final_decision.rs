use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::score::Score;
use super::similarity_report::SimilarityReport;

/// The merged admissibility verdict returned to the caller.
///
/// Carries the full scoring diagnostics plus the dedup scan result, so the
/// UI layer can gate submission on `can_submit` and surface the rest.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FinalDecision {
    /// Rule-table quality score before the similarity penalty.
    pub score: Score,
    /// Problems found by the rule table, in rule order.
    pub issues: Vec<String>,
    /// Zero-delta advice for improving the draft.
    pub suggestions: Vec<String>,
    /// Positive quality markers.
    pub indicators: Vec<String>,
    /// Dedup scan result.
    pub similarity: SimilarityReport,
    /// Quality score after the similarity penalty, clamped to [0, 100].
    pub final_score: Score,
    /// True iff `final_score` clears the pass threshold and nothing
    /// similar was found in the corpus.
    pub can_submit: bool,
}
