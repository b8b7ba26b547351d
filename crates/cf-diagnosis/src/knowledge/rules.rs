use std::io::Read;

use serde::Deserialize;
use tracing::warn;

use super::{DocumentKind, KnowledgeBaseError};
use crate::inference::{ConclusionId, Premise, Rule, SymptomCode};

/// Rule entry exactly as authored, before required fields are checked.
#[derive(Debug, Deserialize)]
struct RuleEntry {
    #[serde(rename = "if")]
    premises: Option<Vec<PremiseEntry>>,
    then: Option<String>,
    cf: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct PremiseEntry {
    gejala: Option<String>,
    cf: Option<f64>,
}

/// Structural problem found in a rule.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuleDefect {
    #[error("missing `if` premises")]
    MissingPremises,
    #[error("`if` lists no premises")]
    EmptyPremises,
    #[error("missing `then` conclusion")]
    MissingConclusion,
    #[error("missing rule `cf`")]
    MissingCertainty,
    #[error("premise #{premise} is missing `gejala`")]
    MissingSymptom { premise: usize },
    #[error("premise #{premise} is missing `cf`")]
    MissingWeight { premise: usize },
    #[error("premise #{premise} weight {value} must be finite and non-negative")]
    WeightOutOfRange { premise: usize, value: f64 },
    #[error("rule cf {0} must be finite and non-negative")]
    CertaintyOutOfRange(f64),
    #[error("premise weights sum to zero")]
    ZeroTotalWeight,
}

/// Rule rejected while loading or building a knowledge base.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("rule #{index} is invalid: {defect}")]
pub struct RuleValidationError {
    pub index: usize,
    pub defect: RuleDefect,
}

pub(crate) fn parse_rules<R: Read>(reader: R) -> Result<Vec<Rule>, KnowledgeBaseError> {
    let entries: Vec<RuleEntry> =
        serde_json::from_reader(reader).map_err(|source| KnowledgeBaseError::Json {
            document: DocumentKind::Rules,
            source,
        })?;

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            entry
                .into_rule()
                .map_err(|defect| KnowledgeBaseError::from(RuleValidationError { index, defect }))
        })
        .collect()
}

impl RuleEntry {
    fn into_rule(self) -> Result<Rule, RuleDefect> {
        let entries = self.premises.ok_or(RuleDefect::MissingPremises)?;
        let conclusion = self
            .then
            .filter(|value| !value.trim().is_empty())
            .ok_or(RuleDefect::MissingConclusion)?;
        let cf = self.cf.ok_or(RuleDefect::MissingCertainty)?;

        let mut premises = Vec::with_capacity(entries.len());
        for (position, entry) in entries.into_iter().enumerate() {
            let symptom = entry
                .gejala
                .filter(|value| !value.trim().is_empty())
                .ok_or(RuleDefect::MissingSymptom { premise: position })?;
            let weight = entry
                .cf
                .ok_or(RuleDefect::MissingWeight { premise: position })?;
            premises.push(Premise {
                symptom: SymptomCode(symptom),
                weight,
            });
        }

        let rule = Rule {
            premises,
            conclusion: ConclusionId(conclusion),
            cf,
        };
        validate_rule(&rule)?;
        Ok(rule)
    }
}

/// Check the numeric preconditions the scorer relies on.
///
/// Weights and certainties are conventionally in [0, 1]. Larger values are
/// accepted with a warning since every score is capped anyway.
pub fn validate_rule(rule: &Rule) -> Result<(), RuleDefect> {
    if rule.premises.is_empty() {
        return Err(RuleDefect::EmptyPremises);
    }
    if rule.conclusion.as_str().trim().is_empty() {
        return Err(RuleDefect::MissingConclusion);
    }
    if !non_negative(rule.cf) {
        return Err(RuleDefect::CertaintyOutOfRange(rule.cf));
    }
    if rule.cf > 1.0 {
        warn!(conclusion = %rule.conclusion, cf = rule.cf, "rule cf exceeds 1.0");
    }
    for (position, premise) in rule.premises.iter().enumerate() {
        if premise.symptom.as_str().trim().is_empty() {
            return Err(RuleDefect::MissingSymptom { premise: position });
        }
        if !non_negative(premise.weight) {
            return Err(RuleDefect::WeightOutOfRange {
                premise: position,
                value: premise.weight,
            });
        }
        if premise.weight > 1.0 {
            warn!(
                conclusion = %rule.conclusion,
                symptom = %premise.symptom,
                weight = premise.weight,
                "premise weight exceeds 1.0"
            );
        }
    }
    if rule.total_weight() <= 0.0 {
        return Err(RuleDefect::ZeroTotalWeight);
    }
    Ok(())
}

fn non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
