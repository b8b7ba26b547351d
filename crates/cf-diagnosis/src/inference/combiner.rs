use std::collections::HashMap;

use serde::Serialize;

use super::domain::{percentage, ConclusionId, Rule, CF_CAP};
use super::evidence::Evidence;
use super::interpretation::{interpret, Interpretation};
use super::scorer::{score_rule, RuleScore};

/// Combined belief in one conclusion across every rule that supports it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConclusionResult {
    pub conclusion: ConclusionId,
    pub cf: f64,
    pub percentage: f64,
    pub interpretation: Interpretation,
    pub contributions: usize,
}

/// Per-conclusion results, kept in the order conclusions first received evidence.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CombinedResults {
    entries: Vec<ConclusionResult>,
    #[serde(skip)]
    index: HashMap<ConclusionId, usize>,
}

impl CombinedResults {
    pub fn get(&self, conclusion: &str) -> Option<&ConclusionResult> {
        self.index
            .get(conclusion)
            .and_then(|position| self.entries.get(*position))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConclusionResult> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fold a positive contribution into the running total for its conclusion.
    pub(crate) fn absorb(&mut self, conclusion: &ConclusionId, cf: f64) {
        let cf = cf.min(CF_CAP);
        match self.index.get(conclusion) {
            Some(position) => {
                let entry = &mut self.entries[*position];
                entry.cf = probabilistic_sum(entry.cf, cf);
                entry.contributions += 1;
            }
            None => {
                self.index.insert(conclusion.clone(), self.entries.len());
                self.entries.push(ConclusionResult {
                    conclusion: conclusion.clone(),
                    cf,
                    percentage: 0.0,
                    interpretation: Interpretation::NotSure,
                    contributions: 1,
                });
            }
        }
    }

    pub(crate) fn annotate(&mut self) {
        for entry in &mut self.entries {
            entry.percentage = percentage(entry.cf);
            entry.interpretation = interpret(entry.cf);
        }
    }
}

impl<'a> IntoIterator for &'a CombinedResults {
    type Item = &'a ConclusionResult;
    type IntoIter = std::slice::Iter<'a, ConclusionResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Merge two independent certainties: `old + new * (1 - old)`, capped.
pub fn probabilistic_sum(old: f64, new: f64) -> f64 {
    (old + new * (1.0 - old)).min(CF_CAP)
}

/// Score every rule and fold positive contributions per conclusion.
pub fn combine(rules: &[Rule], evidence: &Evidence) -> CombinedResults {
    fold_rules(rules, evidence).1
}

/// Score each rule in order, returning every score alongside the folded results.
pub(crate) fn fold_rules(rules: &[Rule], evidence: &Evidence) -> (Vec<RuleScore>, CombinedResults) {
    let mut combined = CombinedResults::default();
    let mut scores = Vec::with_capacity(rules.len());

    for rule in rules {
        let score = score_rule(rule, evidence);
        if score.has_evidence() {
            combined.absorb(&score.conclusion, score.cf);
        }
        scores.push(score);
    }

    combined.annotate();
    (scores, combined)
}
