use crate::config::ConfigError;
use crate::inference::EvidenceError;
use crate::knowledge::KnowledgeBaseError;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    KnowledgeBase(KnowledgeBaseError),
    Evidence(EvidenceError),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Evidence(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::KnowledgeBase(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::KnowledgeBase(err) => write!(f, "knowledge base error: {}", err),
            AppError::Evidence(err) => write!(f, "invalid evidence: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::KnowledgeBase(err) => Some(err),
            AppError::Evidence(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<KnowledgeBaseError> for AppError {
    fn from(value: KnowledgeBaseError) -> Self {
        Self::KnowledgeBase(value)
    }
}

impl From<EvidenceError> for AppError {
    fn from(value: EvidenceError) -> Self {
        Self::Evidence(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::SymptomCode;

    #[test]
    fn evidence_errors_are_client_errors() {
        let err = AppError::from(EvidenceError::OutOfRange {
            symptom: SymptomCode::from("G01"),
            value: 2.0,
        });
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(err.to_string().contains("G01"));
    }

    #[test]
    fn io_errors_are_server_errors() {
        let err = AppError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
