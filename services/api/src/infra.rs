use crate::cli::KnowledgeArgs;
use cf_diagnosis::config::KnowledgeBaseConfig;
use cf_diagnosis::error::AppError;
use cf_diagnosis::inference::InferenceEngine;
use cf_diagnosis::knowledge::KnowledgeBase;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Apply CLI overrides on top of the configured document paths.
pub(crate) fn knowledge_paths(
    configured: &KnowledgeBaseConfig,
    overrides: &KnowledgeArgs,
) -> KnowledgeBaseConfig {
    KnowledgeBaseConfig {
        labels_path: overrides
            .labels
            .clone()
            .unwrap_or_else(|| configured.labels_path.clone()),
        rules_path: overrides
            .rules
            .clone()
            .unwrap_or_else(|| configured.rules_path.clone()),
    }
}

pub(crate) fn load_engine(paths: &KnowledgeBaseConfig) -> Result<InferenceEngine, AppError> {
    let knowledge = KnowledgeBase::from_paths(&paths.labels_path, &paths.rules_path)?;
    Ok(InferenceEngine::new(knowledge))
}

/// Parse a `CODE=CF` pair such as `G01=0.8`.
pub(crate) fn parse_symptom_belief(raw: &str) -> Result<(String, f64), String> {
    let (code, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected CODE=CF, got '{raw}'"))?;
    let code = code.trim();
    if code.is_empty() {
        return Err(format!("missing symptom code in '{raw}'"));
    }
    let cf = value
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("failed to parse certainty in '{raw}' ({err})"))?;
    Ok((code.to_string(), cf))
}
