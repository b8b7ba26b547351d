//! Serializable views handed to presentation adapters.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::inference::{FormattedResult, SymptomCode};
use crate::knowledge::{CertaintyOption, LabelDocument};

pub const NO_DIAGNOSIS_MESSAGE: &str =
    "Unable to determine a diagnosis from the selected symptoms.";

/// Diagnosis outcome as returned to API and CLI consumers.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosisReport {
    pub evaluated_at: DateTime<Utc>,
    pub results: Vec<FormattedResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl DiagnosisReport {
    pub fn new(results: Vec<FormattedResult>, evaluated_at: DateTime<Utc>) -> Self {
        let message = results.is_empty().then_some(NO_DIAGNOSIS_MESSAGE);
        Self {
            evaluated_at,
            results,
            message,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub code: SymptomCode,
    pub text: String,
}

/// Symptom questions with the answer scale a front end should offer.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionnaireView {
    pub questions: Vec<QuestionView>,
    pub certainty_options: Vec<CertaintyOption>,
}

impl QuestionnaireView {
    pub fn from_labels(labels: &LabelDocument) -> Self {
        Self {
            questions: labels
                .symptoms
                .iter()
                .map(|(code, text)| QuestionView {
                    code: code.clone(),
                    text: text.clone(),
                })
                .collect(),
            certainty_options: labels.certainty_options.clone(),
        }
    }
}
