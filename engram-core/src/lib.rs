//! # engram-core
//!
//! Foundation crate for the Engram validation engine.
//! Defines the data model, lexicon config, errors, constants, and traits.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::LexiconConfig;
pub use errors::{EngramError, EngramResult, ScoringError};
pub use models::{
    ExistingFragment, FinalDecision, Score, ScoreReport, SimilarMatch, SimilarityReport,
    SubmissionDraft,
};
