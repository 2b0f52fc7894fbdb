//! # engram-scoring
//!
//! Rule-table quality scoring for memory drafts.
//!
//! A fixed table of independent rules applies additive deltas against a
//! baseline of 50: content length, title, classified vocabulary
//! (personal / temporal / emotional / promotional), character-run noise,
//! and tags. The sum is clamped to [0, 100] once, at the end.
//!
//! Internal failures never escape the engine: it degrades to
//! `ScoreReport::fallback()` — fail-open, but flagged.

pub mod engine;
pub mod rules;

pub use engine::ScoringEngine;
