use std::collections::BTreeMap;
use std::io::Read;

use serde::{Deserialize, Serialize};

use super::{DocumentKind, KnowledgeBaseError};
use crate::inference::{ConclusionId, SymptomCode};

/// Display texts for symptoms and diagnoses plus the answer scale offered to users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelDocument {
    #[serde(default)]
    pub symptoms: BTreeMap<SymptomCode, String>,
    #[serde(default)]
    pub diseases: BTreeMap<ConclusionId, String>,
    #[serde(default = "default_certainty_options")]
    pub certainty_options: Vec<CertaintyOption>,
}

impl Default for LabelDocument {
    fn default() -> Self {
        Self {
            symptoms: BTreeMap::new(),
            diseases: BTreeMap::new(),
            certainty_options: default_certainty_options(),
        }
    }
}

impl LabelDocument {
    pub fn symptom_text(&self, code: &str) -> Option<&str> {
        self.symptoms.get(code).map(String::as_str)
    }

    pub fn disease_text(&self, id: &str) -> Option<&str> {
        self.diseases.get(id).map(String::as_str)
    }
}

/// One answer on the questionnaire scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertaintyOption {
    pub value: f64,
    pub text: String,
}

impl CertaintyOption {
    fn new(value: f64, text: &str) -> Self {
        Self {
            value,
            text: text.to_string(),
        }
    }
}

pub fn default_certainty_options() -> Vec<CertaintyOption> {
    vec![
        CertaintyOption::new(0.0, "No"),
        CertaintyOption::new(0.2, "Slightly sure (20%)"),
        CertaintyOption::new(0.4, "Fairly sure (40%)"),
        CertaintyOption::new(0.6, "Sure (60%)"),
        CertaintyOption::new(0.8, "Very sure (80%)"),
        CertaintyOption::new(1.0, "Certain (100%)"),
    ]
}

pub(crate) fn parse_labels<R: Read>(reader: R) -> Result<LabelDocument, KnowledgeBaseError> {
    serde_json::from_reader(reader).map_err(|source| KnowledgeBaseError::Json {
        document: DocumentKind::Labels,
        source,
    })
}
