//! Exact Jaccard similarity over word sets.

use std::collections::HashSet;

/// Reduce text to its case-folded whitespace token set.
pub fn word_set(text: &str) -> HashSet<String> {
    text.split_whitespace()
        .map(|w| w.to_lowercase())
        .collect()
}

/// Compute exact Jaccard similarity between two word sets.
///
/// J(A, B) = |A ∩ B| / |A ∪ B|
/// Returns 0.0 if both sets are empty.
pub fn jaccard_similarity(set_a: &HashSet<String>, set_b: &HashSet<String>) -> f64 {
    if set_a.is_empty() && set_b.is_empty() {
        return 0.0;
    }
    let intersection = set_a.intersection(set_b).count();
    let union = set_a.union(set_b).count();
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}
