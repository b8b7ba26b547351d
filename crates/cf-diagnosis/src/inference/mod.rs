//! Certainty-factor evaluation: rule scoring, evidence combination, banding and formatting.
//!
//! Every function here is pure. The knowledge base and the user's evidence are passed in
//! explicitly, so one engine can serve concurrent evaluations without locking.

mod combiner;
mod domain;
mod evidence;
mod format;
mod interpretation;
mod scorer;

#[cfg(test)]
mod tests;

pub use combiner::{combine, probabilistic_sum, CombinedResults, ConclusionResult};
pub use domain::{ConclusionId, Premise, Rule, SymptomCode, CF_CAP, MATCH_THRESHOLD};
pub use evidence::{Evidence, EvidenceError};
pub use format::{format_results, FormattedResult};
pub use interpretation::{interpret, Interpretation};
pub use scorer::{score_rule, RuleScore};

use serde::Serialize;
use tracing::debug;

use crate::knowledge::KnowledgeBase;

/// Stateless evaluator bound to one immutable knowledge base.
#[derive(Debug, Clone)]
pub struct InferenceEngine {
    knowledge: KnowledgeBase,
}

impl InferenceEngine {
    pub fn new(knowledge: KnowledgeBase) -> Self {
        Self { knowledge }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Score every rule and combine contributions, keeping the per-rule trail.
    pub fn evaluate(&self, evidence: &Evidence) -> Evaluation {
        let (rule_scores, combined) = combiner::fold_rules(self.knowledge.rules(), evidence);

        debug!(
            observed = evidence.observed().count(),
            rules = rule_scores.len(),
            contributing = rule_scores.iter().filter(|score| score.has_evidence()).count(),
            conclusions = combined.len(),
            "evidence evaluated"
        );

        Evaluation {
            rule_scores,
            combined,
        }
    }

    /// Evaluate and return presentation-ready results, strongest first.
    pub fn diagnose(&self, evidence: &Evidence) -> Vec<FormattedResult> {
        let evaluation = self.evaluate(evidence);
        format_results(&evaluation.combined, &self.knowledge.labels().diseases)
    }
}

/// Full outcome of one evaluation pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub rule_scores: Vec<RuleScore>,
    pub combined: CombinedResults,
}
