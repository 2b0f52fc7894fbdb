//! SimilarityDetector — scans the accepted corpus for near-duplicates.

use engram_core::models::{ExistingFragment, SimilarMatch, SimilarityReport};
use engram_core::traits::ISimilarityDetector;
use tracing::debug;

use crate::jaccard::{jaccard_similarity, word_set};

/// Configuration for the similarity detector.
#[derive(Debug, Clone)]
pub struct SimilarityConfig {
    /// Strict near-duplicate threshold: a fragment is similar only when
    /// its Jaccard similarity is strictly greater than this value.
    pub similar_threshold: f64,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            similar_threshold: 0.8,
        }
    }
}

/// The corpus near-duplicate detector.
///
/// O(n) over the corpus per call, each comparison O(|tokens|). Holds only
/// configuration; every call is a pure function of its inputs.
pub struct SimilarityDetector {
    config: SimilarityConfig,
}

impl SimilarityDetector {
    pub fn new(config: SimilarityConfig) -> Self {
        Self { config }
    }

    /// The detector configuration.
    pub fn config(&self) -> &SimilarityConfig {
        &self.config
    }

    /// Compare content against every fragment in the corpus.
    ///
    /// An empty corpus short-circuits to the empty report. Otherwise
    /// `similar_fragments` lists threshold-crossing fragments in corpus
    /// order and `max_similarity` tracks the maximum across the whole
    /// corpus, similar or not.
    pub fn detect(&self, content: &str, corpus: &[ExistingFragment]) -> SimilarityReport {
        if corpus.is_empty() {
            return SimilarityReport::empty();
        }

        let draft_words = word_set(content);
        let mut similar_fragments = Vec::new();
        let mut max_similarity = 0.0f64;

        for fragment in corpus {
            let similarity = jaccard_similarity(&draft_words, &word_set(&fragment.content));
            max_similarity = max_similarity.max(similarity);
            if similarity > self.config.similar_threshold {
                similar_fragments.push(SimilarMatch {
                    fragment_id: fragment.id.clone(),
                    similarity,
                });
            }
        }

        debug!(
            corpus = corpus.len(),
            similar = similar_fragments.len(),
            max_similarity,
            "similarity scan complete"
        );

        SimilarityReport {
            has_similar: !similar_fragments.is_empty(),
            similar_fragments,
            max_similarity,
        }
    }
}

impl Default for SimilarityDetector {
    fn default() -> Self {
        Self::new(SimilarityConfig::default())
    }
}

impl ISimilarityDetector for SimilarityDetector {
    fn detect(&self, content: &str, corpus: &[ExistingFragment]) -> SimilarityReport {
        SimilarityDetector::detect(self, content, corpus)
    }
}
