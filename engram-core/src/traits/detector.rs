use crate::models::{ExistingFragment, SimilarityReport};

/// Corpus near-duplicate detection.
pub trait ISimilarityDetector: Send + Sync {
    /// Compare content against every fragment in the corpus.
    fn detect(&self, content: &str, corpus: &[ExistingFragment]) -> SimilarityReport;
}
