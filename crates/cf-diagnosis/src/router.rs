use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::debug;

use crate::error::AppError;
use crate::inference::{Evidence, InferenceEngine};
use crate::report::{DiagnosisReport, QuestionnaireView};

/// Evidence as posted by a client, validated before evaluation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiagnosisRequest {
    #[serde(default)]
    pub evidence: BTreeMap<String, f64>,
}

/// Router builder exposing the questionnaire and diagnosis endpoints.
pub fn diagnosis_router(engine: Arc<InferenceEngine>) -> Router {
    Router::new()
        .route("/api/v1/questionnaire", get(questionnaire_handler))
        .route("/api/v1/diagnosis", post(diagnosis_handler))
        .with_state(engine)
}

pub(crate) async fn questionnaire_handler(
    State(engine): State<Arc<InferenceEngine>>,
) -> Json<QuestionnaireView> {
    Json(QuestionnaireView::from_labels(engine.knowledge().labels()))
}

pub(crate) async fn diagnosis_handler(
    State(engine): State<Arc<InferenceEngine>>,
    Json(request): Json<DiagnosisRequest>,
) -> Result<Json<DiagnosisReport>, AppError> {
    let evidence = Evidence::try_from(request.evidence)?;

    let unknown = evidence
        .observed()
        .filter(|(symptom, _)| {
            !engine
                .knowledge()
                .labels()
                .symptoms
                .contains_key(*symptom)
        })
        .count();
    if unknown > 0 {
        debug!(unknown, "evidence names symptoms missing from the label document");
    }

    let results = engine.diagnose(&evidence);
    Ok(Json(DiagnosisReport::new(results, Utc::now())))
}
