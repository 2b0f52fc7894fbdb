//! Property tests for the full decision pipeline.

use engram_core::models::{ExistingFragment, SubmissionDraft};
use engram_validation::ValidationEngine;
use proptest::prelude::*;

fn corpus_from(contents: &[String]) -> Vec<ExistingFragment> {
    contents
        .iter()
        .enumerate()
        .map(|(i, c)| ExistingFragment::new(format!("f{i}"), c.clone()))
        .collect()
}

proptest! {
    #[test]
    fn scores_are_always_in_bounds(
        content in "\\PC{0,200}",
        title in "\\PC{0,40}",
        corpus in prop::collection::vec("[a-h ]{0,60}", 0..4),
    ) {
        let draft = SubmissionDraft::new(content, title, vec![]);
        let decision = ValidationEngine::default().validate(&draft, &corpus_from(&corpus));

        prop_assert!(decision.score.value() <= 100);
        prop_assert!(decision.final_score.value() <= 100);
    }

    #[test]
    fn similarities_are_always_in_unit_interval(
        content in "[a-h ]{0,80}",
        corpus in prop::collection::vec("[a-h ]{0,60}", 0..4),
    ) {
        let draft = SubmissionDraft::new(content, "", vec![]);
        let decision = ValidationEngine::default().validate(&draft, &corpus_from(&corpus));

        prop_assert!(decision.similarity.max_similarity >= 0.0);
        prop_assert!(decision.similarity.max_similarity <= 1.0);
        for m in &decision.similarity.similar_fragments {
            prop_assert!(m.similarity >= 0.0 && m.similarity <= 1.0);
        }
    }

    #[test]
    fn can_submit_implies_passing_and_unique(
        content in "\\PC{0,120}",
        title in "\\PC{0,20}",
        corpus in prop::collection::vec("[a-h ]{0,60}", 0..4),
    ) {
        let draft = SubmissionDraft::new(content, title, vec![]);
        let decision = ValidationEngine::default().validate(&draft, &corpus_from(&corpus));

        if decision.can_submit {
            prop_assert!(decision.final_score.is_passing());
            prop_assert!(!decision.similarity.has_similar);
        } else {
            prop_assert!(
                !decision.final_score.is_passing() || decision.similarity.has_similar
            );
        }
    }

    #[test]
    fn identical_inputs_produce_identical_decisions(
        content in "\\PC{0,120}",
        corpus in prop::collection::vec("[a-h ]{0,60}", 0..4),
    ) {
        let draft = SubmissionDraft::new(content, "A title", vec![]);
        let engine = ValidationEngine::default();
        let corpus = corpus_from(&corpus);

        let a = serde_json::to_value(engine.validate(&draft, &corpus)).unwrap();
        let b = serde_json::to_value(engine.validate(&draft, &corpus)).unwrap();
        prop_assert_eq!(a, b);
    }
}
