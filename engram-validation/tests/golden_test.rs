//! Golden decision tests: each fixture holds a full submission plus the
//! expected verdict, end to end through the orchestrator.

use engram_core::models::{ExistingFragment, FinalDecision, SubmissionDraft};
use engram_validation::ValidationEngine;
use serde_json::Value;
use test_fixtures::load_fixture_value;

fn run(fixture: &Value) -> FinalDecision {
    let draft: SubmissionDraft =
        serde_json::from_value(fixture["input"]["draft"].clone()).expect("fixture draft");
    let corpus: Vec<ExistingFragment> =
        serde_json::from_value(fixture["input"]["corpus"].clone()).expect("fixture corpus");
    ValidationEngine::default().validate(&draft, &corpus)
}

fn assert_expected(decision: &FinalDecision, expected: &Value) {
    assert_eq!(
        i64::from(decision.score.value()),
        expected["score"].as_i64().unwrap(),
        "score mismatch"
    );
    assert_eq!(
        i64::from(decision.final_score.value()),
        expected["final_score"].as_i64().unwrap(),
        "final_score mismatch"
    );
    assert_eq!(
        decision.can_submit,
        expected["can_submit"].as_bool().unwrap(),
        "can_submit mismatch"
    );
    assert_eq!(
        decision.similarity.has_similar,
        expected["has_similar"].as_bool().unwrap(),
        "has_similar mismatch"
    );
    let max = expected["max_similarity"].as_f64().unwrap();
    assert!(
        (decision.similarity.max_similarity - max).abs() < 1e-9,
        "max_similarity mismatch: {} vs {}",
        decision.similarity.max_similarity,
        max
    );
    if let Some(needles) = expected["issues_contain"].as_array() {
        for needle in needles {
            let needle = needle.as_str().unwrap();
            assert!(
                decision.issues.iter().any(|i| i.contains(needle)),
                "no issue contains '{needle}'"
            );
        }
    }
    if let Some(count) = expected["indicator_count"].as_u64() {
        assert_eq!(decision.indicators.len() as u64, count);
    }
}

#[test]
fn golden_rich_memory() {
    let fixture = load_fixture_value("golden/decision/rich_memory.json");
    let decision = run(&fixture);
    assert_expected(&decision, &fixture["expected"]);
}

#[test]
fn golden_short_low_quality() {
    let fixture = load_fixture_value("golden/decision/short_low_quality.json");
    let decision = run(&fixture);
    assert_expected(&decision, &fixture["expected"]);
}

#[test]
fn golden_duplicate_content() {
    let fixture = load_fixture_value("golden/decision/duplicate_content.json");
    let decision = run(&fixture);
    assert_expected(&decision, &fixture["expected"]);
}

#[test]
fn golden_noisy_repetition() {
    let fixture = load_fixture_value("golden/decision/noisy_repetition.json");
    let decision = run(&fixture);
    assert_expected(&decision, &fixture["expected"]);
}
