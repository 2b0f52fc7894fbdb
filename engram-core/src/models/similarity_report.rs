use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One corpus fragment that crossed the similarity threshold.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SimilarMatch {
    pub fragment_id: String,
    /// Jaccard similarity in [0, 1].
    pub similarity: f64,
}

/// Result of scanning the corpus for near-duplicates.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SimilarityReport {
    /// True iff at least one fragment crossed the threshold.
    pub has_similar: bool,
    /// Threshold-crossing fragments, in corpus order.
    pub similar_fragments: Vec<SimilarMatch>,
    /// Maximum similarity across the whole corpus, 0.0 for an empty corpus.
    pub max_similarity: f64,
}

impl SimilarityReport {
    /// Report for an empty corpus: nothing similar, max similarity 0.
    pub fn empty() -> Self {
        Self {
            has_similar: false,
            similar_fragments: Vec::new(),
            max_similarity: 0.0,
        }
    }
}
