mod scoring_error;

pub use scoring_error::ScoringError;

/// Workspace-wide result alias.
pub type EngramResult<T> = Result<T, EngramError>;

/// Top-level error for the Engram validation engine.
///
/// None of these cross the engine boundary in normal operation: the scoring
/// engine absorbs its failures into the fallback report, and the similarity
/// detector and decision merge are total functions.
#[derive(Debug, thiserror::Error)]
pub enum EngramError {
    #[error(transparent)]
    Scoring(#[from] ScoringError),

    #[error("lexicon config parse error: {0}")]
    LexiconParse(#[from] toml::de::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
