//! Integration tests for the similarity detector.

use engram_core::models::ExistingFragment;
use engram_similarity::{SimilarityConfig, SimilarityDetector};

fn fragment(id: &str, content: &str) -> ExistingFragment {
    ExistingFragment::new(id, content)
}

#[test]
fn empty_corpus_short_circuits() {
    let report = SimilarityDetector::default().detect("anything", &[]);
    assert!(!report.has_similar);
    assert!(report.similar_fragments.is_empty());
    assert_eq!(report.max_similarity, 0.0);
}

#[test]
fn identical_content_is_a_perfect_match() {
    let corpus = vec![fragment("f1", "the lake froze over in january")];
    let report = SimilarityDetector::default().detect("the lake froze over in january", &corpus);

    assert!(report.has_similar);
    assert_eq!(report.similar_fragments.len(), 1);
    assert_eq!(report.similar_fragments[0].fragment_id, "f1");
    assert_eq!(report.similar_fragments[0].similarity, 1.0);
    assert_eq!(report.max_similarity, 1.0);
}

#[test]
fn threshold_is_strict() {
    // 4 shared tokens of 5 in the union: similarity exactly 0.8,
    // which must NOT count as similar.
    let corpus = vec![fragment("f1", "alpha beta gamma delta")];
    let report =
        SimilarityDetector::default().detect("alpha beta gamma delta epsilon", &corpus);

    assert!(!report.has_similar);
    assert!(report.similar_fragments.is_empty());
    assert_eq!(report.max_similarity, 0.8);
}

#[test]
fn max_similarity_tracks_non_similar_fragments() {
    let corpus = vec![
        fragment("far", "completely unrelated words here"),
        fragment("near", "alpha beta gamma delta"),
    ];
    let report =
        SimilarityDetector::default().detect("alpha beta gamma delta epsilon", &corpus);

    assert!(!report.has_similar);
    assert_eq!(report.max_similarity, 0.8);
}

#[test]
fn similar_fragments_keep_corpus_order() {
    let corpus = vec![
        fragment("a", "one two three four five"),
        fragment("b", "unrelated content entirely different"),
        fragment("c", "one two three four five"),
    ];
    let report = SimilarityDetector::default().detect("one two three four five", &corpus);

    assert!(report.has_similar);
    let ids: Vec<&str> = report
        .similar_fragments
        .iter()
        .map(|m| m.fragment_id.as_str())
        .collect();
    assert_eq!(ids, vec!["a", "c"]);
}

#[test]
fn case_and_token_order_are_ignored() {
    let corpus = vec![fragment("f1", "January Lake The Froze")];
    let report = SimilarityDetector::default().detect("the froze january lake", &corpus);
    assert_eq!(report.max_similarity, 1.0);
}

#[test]
fn custom_threshold_is_respected() {
    let detector = SimilarityDetector::new(SimilarityConfig {
        similar_threshold: 0.4,
    });
    let corpus = vec![fragment("f1", "a b c")];
    // intersection 2, union 4 → 0.5 > 0.4.
    let report = detector.detect("a b d", &corpus);
    assert!(report.has_similar);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn similarity_is_always_in_unit_interval(
            content in "[a-f ]{0,60}",
            corpus_content in "[a-f ]{0,60}",
        ) {
            let corpus = vec![fragment("f1", &corpus_content)];
            let report = SimilarityDetector::default().detect(&content, &corpus);
            prop_assert!(report.max_similarity >= 0.0);
            prop_assert!(report.max_similarity <= 1.0);
        }

        #[test]
        fn content_is_always_identical_to_itself_or_empty(
            content in "[a-z ]{1,60}",
        ) {
            let corpus = vec![fragment("f1", &content)];
            let report = SimilarityDetector::default().detect(&content, &corpus);
            if content.split_whitespace().next().is_some() {
                prop_assert_eq!(report.max_similarity, 1.0);
            } else {
                // Whitespace-only on both sides: defined as 0.
                prop_assert_eq!(report.max_similarity, 0.0);
            }
        }
    }
}
