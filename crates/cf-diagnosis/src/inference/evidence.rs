use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::SymptomCode;

/// User-declared beliefs keyed by symptom.
///
/// Symptoms missing from the mapping read as a belief of zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")]
pub struct Evidence {
    beliefs: BTreeMap<SymptomCode, f64>,
}

impl Evidence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, EvidenceError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut evidence = Self::new();
        for (symptom, cf) in pairs {
            evidence.insert(symptom, cf)?;
        }
        Ok(evidence)
    }

    /// Record a belief, replacing any earlier value for the same symptom.
    pub fn insert(&mut self, symptom: impl Into<String>, cf: f64) -> Result<(), EvidenceError> {
        let symptom = SymptomCode(symptom.into());
        if !cf.is_finite() || !(0.0..=1.0).contains(&cf) {
            return Err(EvidenceError::OutOfRange { symptom, value: cf });
        }
        self.beliefs.insert(symptom, cf);
        Ok(())
    }

    pub fn belief(&self, symptom: &str) -> f64 {
        self.beliefs.get(symptom).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.beliefs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beliefs.is_empty()
    }

    /// Symptoms with a belief above zero.
    pub fn observed(&self) -> impl Iterator<Item = (&SymptomCode, f64)> {
        self.beliefs
            .iter()
            .filter(|(_, cf)| **cf > 0.0)
            .map(|(symptom, cf)| (symptom, *cf))
    }
}

impl TryFrom<BTreeMap<String, f64>> for Evidence {
    type Error = EvidenceError;

    fn try_from(value: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        Self::from_pairs(value)
    }
}

impl From<Evidence> for BTreeMap<String, f64> {
    fn from(value: Evidence) -> Self {
        value
            .beliefs
            .into_iter()
            .map(|(symptom, cf)| (symptom.0, cf))
            .collect()
    }
}

/// Rejected evidence value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvidenceError {
    #[error("certainty for symptom {symptom} must be a number within [0, 1], got {value}")]
    OutOfRange { symptom: SymptomCode, value: f64 },
}
