//! ScoringEngine — applies the rule table, aggregates diagnostics, and
//! absorbs internal failures into the fallback report.

use engram_core::config::LexiconConfig;
use engram_core::models::{Score, ScoreReport, SubmissionDraft};
use engram_core::traits::IScorer;
use engram_core::EngramResult;
use tracing::{debug, warn};

use crate::rules::{self, RuleFn};

/// The rule-table scoring engine.
///
/// Holds only configuration: the lexicons and the rule list. Evaluation is
/// a pure function of the draft; nothing survives past a single call.
pub struct ScoringEngine {
    lexicons: LexiconConfig,
    rules: Vec<RuleFn>,
}

impl ScoringEngine {
    pub fn new(lexicons: LexiconConfig) -> Self {
        Self {
            lexicons,
            rules: rules::default_rules(),
        }
    }

    /// Replace the rule table.
    ///
    /// This is the seam that makes the fallback path testable: inject a
    /// failing rule and the engine must degrade instead of erroring.
    pub fn with_rules(mut self, rules: Vec<RuleFn>) -> Self {
        self.rules = rules;
        self
    }

    /// The lexicons this engine matches against.
    pub fn lexicons(&self) -> &LexiconConfig {
        &self.lexicons
    }

    /// Evaluate a draft against the rule table.
    ///
    /// Never fails: any internal rule error is logged and converted into
    /// `ScoreReport::fallback()`, whose score (50) sits below the pass
    /// threshold — an internal failure blocks high-confidence submission
    /// instead of silently allowing or silently rejecting it.
    pub fn evaluate(&self, draft: &SubmissionDraft) -> ScoreReport {
        match self.apply_rules(draft) {
            Ok(report) => report,
            Err(e) => {
                warn!(error = %e, "rule evaluation failed, returning fallback report");
                ScoreReport::fallback()
            }
        }
    }

    fn apply_rules(&self, draft: &SubmissionDraft) -> EngramResult<ScoreReport> {
        self.lexicons.ensure_populated()?;

        let mut raw = Score::BASELINE;
        let mut issues = Vec::new();
        let mut suggestions = Vec::new();
        let mut indicators = Vec::new();

        for rule in &self.rules {
            let outcome = rule(draft, &self.lexicons)?;
            raw += outcome.delta;
            issues.extend(outcome.issues);
            suggestions.extend(outcome.suggestions);
            indicators.extend(outcome.indicators);
        }

        debug!(
            raw,
            issues = issues.len(),
            indicators = indicators.len(),
            "rule table applied"
        );

        Ok(ScoreReport {
            score: Score::from_raw(raw),
            issues,
            suggestions,
            indicators,
        })
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(LexiconConfig::default())
    }
}

impl IScorer for ScoringEngine {
    fn evaluate(&self, draft: &SubmissionDraft) -> ScoreReport {
        ScoringEngine::evaluate(self, draft)
    }
}
