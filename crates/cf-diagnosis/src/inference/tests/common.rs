use std::collections::BTreeMap;

use crate::inference::{ConclusionId, Evidence, InferenceEngine, Premise, Rule, SymptomCode};
use crate::knowledge::{default_certainty_options, KnowledgeBase, LabelDocument};

pub(super) const TOLERANCE: f64 = 1e-9;

pub(super) fn rule(premises: &[(&str, f64)], conclusion: &str, cf: f64) -> Rule {
    Rule::new(
        premises
            .iter()
            .map(|(symptom, weight)| Premise::new(*symptom, *weight))
            .collect(),
        conclusion,
        cf,
    )
}

pub(super) fn evidence(pairs: &[(&str, f64)]) -> Evidence {
    Evidence::from_pairs(pairs.iter().map(|(symptom, cf)| (*symptom, *cf))).expect("valid evidence")
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}

pub(super) fn labels() -> LabelDocument {
    let symptoms: BTreeMap<SymptomCode, String> = [
        ("G01", "Fever"),
        ("G02", "Dry cough"),
        ("G03", "Loss of smell"),
        ("G04", "Sneezing"),
    ]
    .into_iter()
    .map(|(code, text)| (SymptomCode::from(code), text.to_string()))
    .collect();

    let diseases: BTreeMap<ConclusionId, String> = [("P01", "COVID-19"), ("P02", "Common cold")]
        .into_iter()
        .map(|(id, text)| (ConclusionId::from(id), text.to_string()))
        .collect();

    LabelDocument {
        symptoms,
        diseases,
        certainty_options: default_certainty_options(),
    }
}

pub(super) fn sample_rules() -> Vec<Rule> {
    vec![
        rule(&[("G01", 0.8), ("G02", 0.6), ("G03", 1.0)], "P01", 0.9),
        rule(&[("G03", 0.8)], "P01", 0.7),
        rule(&[("G02", 0.4), ("G04", 0.8)], "P02", 0.8),
    ]
}

pub(super) fn engine() -> InferenceEngine {
    let knowledge = KnowledgeBase::new(labels(), sample_rules()).expect("sample rules valid");
    InferenceEngine::new(knowledge)
}
