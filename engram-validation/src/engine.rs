//! ValidationEngine — fork-joins the two leaf computations and merges
//! them into the final admissibility decision.

use engram_core::config::LexiconConfig;
use engram_core::models::{
    ExistingFragment, FinalDecision, Score, ScoreReport, SimilarityReport, SubmissionDraft,
};
use engram_core::traits::IValidator;
use engram_scoring::ScoringEngine;
use engram_similarity::SimilarityDetector;
use tracing::info;

/// Configuration for the decision merge.
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Minimum final score before a submission can be accepted.
    pub pass_threshold: u8,
    /// Weight of the similarity penalty subtracted from the quality score.
    pub similarity_penalty_weight: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            pass_threshold: Score::PASS,
            similarity_penalty_weight: 30.0,
        }
    }
}

/// The validation orchestrator.
///
/// Runs the scoring engine and the similarity detector as a fork-join
/// pair — both are side-effect-free over their own inputs, so sequential
/// execution would be observationally identical — and merges after both
/// complete. The merge is total: the scoring engine's fallback policy
/// guarantees a well-formed report on every path.
pub struct ValidationEngine {
    scorer: ScoringEngine,
    detector: SimilarityDetector,
    config: ValidationConfig,
}

impl ValidationEngine {
    pub fn new(config: ValidationConfig) -> Self {
        Self {
            scorer: ScoringEngine::default(),
            detector: SimilarityDetector::default(),
            config,
        }
    }

    /// Score with a custom lexicon, e.g. a localized deployment file.
    pub fn with_lexicons(mut self, lexicons: LexiconConfig) -> Self {
        self.scorer = ScoringEngine::new(lexicons);
        self
    }

    /// Assemble an engine from pre-built leaves.
    pub fn from_parts(
        scorer: ScoringEngine,
        detector: SimilarityDetector,
        config: ValidationConfig,
    ) -> Self {
        Self {
            scorer,
            detector,
            config,
        }
    }

    /// The merge configuration.
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate a draft against the corpus and produce the final verdict.
    pub fn validate(&self, draft: &SubmissionDraft, corpus: &[ExistingFragment]) -> FinalDecision {
        let (report, similarity) = rayon::join(
            || self.scorer.evaluate(draft),
            || self.detector.detect(&draft.content, corpus),
        );
        self.merge(report, similarity)
    }

    /// Merge rule: the similarity penalty drags the quality score down,
    /// and any near-duplicate vetoes submission outright.
    fn merge(&self, report: ScoreReport, similarity: SimilarityReport) -> FinalDecision {
        let penalty =
            (similarity.max_similarity * self.config.similarity_penalty_weight).round() as i32;
        let final_score = Score::from_raw(i32::from(report.score.value()) - penalty);
        let can_submit =
            final_score.value() >= self.config.pass_threshold && !similarity.has_similar;

        info!(
            score = %report.score,
            final_score = %final_score,
            max_similarity = similarity.max_similarity,
            can_submit,
            "validation decision"
        );

        FinalDecision {
            score: report.score,
            issues: report.issues,
            suggestions: report.suggestions,
            indicators: report.indicators,
            similarity,
            final_score,
            can_submit,
        }
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}

impl IValidator for ValidationEngine {
    fn validate(&self, draft: &SubmissionDraft, corpus: &[ExistingFragment]) -> FinalDecision {
        ValidationEngine::validate(self, draft, corpus)
    }
}
