//! Classified vocabulary for the scoring rule table.
//!
//! # Examples
//!
//! ```
//! use engram_core::config::LexiconConfig;
//!
//! let config = LexiconConfig::default();
//! assert!(config.personal.contains(&"grandmother".to_string()));
//! assert!(config.ensure_populated().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::ScoringError;
use crate::EngramResult;

/// The four term categories the scoring rules match against.
///
/// Passed to the scoring engine as configuration data rather than baked-in
/// literals, so tests can shrink it and deployments can localize it. Terms
/// are stored lowercase; single-word terms match as whole tokens,
/// multi-word terms as substrings of the case-folded content. A term
/// belongs to at most one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// First-person and kinship vocabulary — marks content as a personal memory.
    pub personal: Vec<String>,
    /// Vocabulary anchoring the memory in time.
    pub temporal: Vec<String>,
    /// Vocabulary carrying emotional weight.
    pub emotional: Vec<String>,
    /// Promotional/spam vocabulary — any hit is a strong negative signal.
    pub promotional: Vec<String>,
}

impl LexiconConfig {
    /// Parse a lexicon from TOML, e.g. a localized deployment file.
    pub fn from_toml_str(raw: &str) -> EngramResult<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Check that all four categories are populated.
    ///
    /// An empty category would silently skew every score, so the scoring
    /// engine treats it as an internal failure and degrades to the
    /// fallback report.
    pub fn ensure_populated(&self) -> Result<(), ScoringError> {
        let categories = [
            ("personal", &self.personal),
            ("temporal", &self.temporal),
            ("emotional", &self.emotional),
            ("promotional", &self.promotional),
        ];
        for (category, terms) in categories {
            if terms.is_empty() {
                return Err(ScoringError::EmptyLexicon {
                    category: category.to_string(),
                });
            }
        }
        Ok(())
    }
}

fn terms(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            personal: terms(&[
                "i",
                "my",
                "me",
                "mine",
                "myself",
                "we",
                "our",
                "us",
                "mother",
                "father",
                "mom",
                "dad",
                "grandmother",
                "grandfather",
                "grandma",
                "grandpa",
                "sister",
                "brother",
                "family",
                "friend",
            ]),
            temporal: terms(&[
                "yesterday",
                "today",
                "tomorrow",
                "childhood",
                "summer",
                "winter",
                "spring",
                "autumn",
                "morning",
                "afternoon",
                "evening",
                "night",
                "year",
                "years",
                "month",
                "week",
                "day",
                "ago",
                "when",
                "while",
                "remember",
                "moment",
                "once",
            ]),
            emotional: terms(&[
                "happy",
                "happiness",
                "sad",
                "sadness",
                "love",
                "loved",
                "miss",
                "missed",
                "joy",
                "tears",
                "cry",
                "cried",
                "laugh",
                "laughed",
                "smile",
                "smiled",
                "warm",
                "afraid",
                "proud",
                "grateful",
                "lonely",
                "bittersweet",
            ]),
            promotional: terms(&[
                "buy",
                "sale",
                "discount",
                "free",
                "cheap",
                "offer",
                "deal",
                "promo",
                "promotion",
                "subscribe",
                "click",
                "earn",
                "profit",
                "winner",
                "prize",
                "giveaway",
                "http",
                "https",
                "www",
                "limited time",
                "click here",
            ]),
        }
    }
}
