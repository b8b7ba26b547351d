use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Upper bound for every certainty factor produced by the engine.
pub const CF_CAP: f64 = 0.9998;

/// Rules matching a smaller share of their premises contribute nothing.
pub const MATCH_THRESHOLD: f64 = 0.3;

/// Identifier wrapper for an observable symptom.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymptomCode(pub String);

impl SymptomCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SymptomCode {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl Borrow<str> for SymptomCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SymptomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier wrapper for a diagnosis a rule concludes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConclusionId(pub String);

impl ConclusionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ConclusionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl Borrow<str> for ConclusionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConclusionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Symptom paired with the weight the rule author assigns to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Premise {
    pub symptom: SymptomCode,
    pub weight: f64,
}

impl Premise {
    pub fn new(symptom: impl Into<String>, weight: f64) -> Self {
        Self {
            symptom: SymptomCode(symptom.into()),
            weight,
        }
    }
}

/// Weighted if-then rule from the knowledge base.
///
/// Rules are validated when loaded (see [`crate::knowledge`]). Hand-built rules
/// that skip validation still score, but one without positive total weight never
/// contributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule {
    pub premises: Vec<Premise>,
    pub conclusion: ConclusionId,
    pub cf: f64,
}

impl Rule {
    pub fn new(premises: Vec<Premise>, conclusion: impl Into<String>, cf: f64) -> Self {
        Self {
            premises,
            conclusion: ConclusionId(conclusion.into()),
            cf,
        }
    }

    pub fn total_weight(&self) -> f64 {
        self.premises.iter().map(|premise| premise.weight).sum()
    }
}

pub(crate) fn percentage(cf: f64) -> f64 {
    cf * 100.0
}
