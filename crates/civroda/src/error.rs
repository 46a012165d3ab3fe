use crate::config::ConfigError;
use crate::planning::{PlanningServiceError, RecordStoreError};
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
    Records(RecordStoreError),
    Planning(PlanningServiceError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Records(err) => write!(f, "record store error: {}", err),
            AppError::Planning(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Records(err) => Some(err),
            AppError::Planning(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Planning(_) => StatusCode::NOT_FOUND,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Records(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

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

impl From<RecordStoreError> for AppError {
    fn from(value: RecordStoreError) -> Self {
        Self::Records(value)
    }
}

impl From<PlanningServiceError> for AppError {
    fn from(value: PlanningServiceError) -> Self {
        Self::Planning(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planning::DaId;

    #[test]
    fn planning_errors_map_to_not_found() {
        let error = AppError::from(PlanningServiceError::NotFound(DaId::from("DA-404")));
        assert_eq!(error.to_string(), "DA not found: DA-404");
        assert_eq!(error.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn record_errors_map_to_internal_error() {
        let error = AppError::from(RecordStoreError::DuplicateId("DA-1".to_string()));
        assert!(std::error::Error::source(&error).is_some());
        assert_eq!(
            error.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
