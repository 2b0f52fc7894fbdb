//! # engram-validation
//!
//! The validation orchestrator: fork-joins the scoring engine and the
//! similarity detector, merges both results into a `FinalDecision`, and
//! applies the admissibility rule
//! (`final_score ≥ pass threshold ∧ no near-duplicate`).
//!
//! Also hosts the stake-sizing rule the settlement layer applies to the
//! engine's score.

pub mod engine;
pub mod stake;

pub use engine::{ValidationConfig, ValidationEngine};
pub use stake::StakePolicy;
