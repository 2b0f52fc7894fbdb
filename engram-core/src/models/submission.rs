use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A user-submitted memory awaiting validation.
///
/// Immutable input: no component mutates it. A missing title or missing
/// tag list is represented as an empty value, never as an error.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubmissionDraft {
    /// The memory text itself.
    pub content: String,
    /// Short title. Empty when the user supplied none.
    #[serde(default)]
    pub title: String,
    /// Free-form tags. Empty when the user supplied none.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl SubmissionDraft {
    pub fn new(
        content: impl Into<String>,
        title: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            content: content.into(),
            title: title.into(),
            tags,
        }
    }
}

/// A previously accepted memory in the dedup corpus. Read-only to the engine.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExistingFragment {
    pub id: String,
    pub content: String,
}

impl ExistingFragment {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }
}
