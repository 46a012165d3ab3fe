use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Local;
use serde_json::json;

use super::records::RecordProvider;
use super::service::{DaFilter, PlanningService, PlanningServiceError};

/// Router builder exposing the DA lookup, scoring and insight endpoints.
pub fn planning_router<P>(service: Arc<PlanningService<P>>) -> Router
where
    P: RecordProvider + ?Sized + 'static,
{
    Router::new()
        .route("/api/v1/councils", get(councils_handler::<P>))
        .route(
            "/api/v1/councils/:council/themes",
            get(themes_handler::<P>),
        )
        .route("/api/v1/das", get(list_handler::<P>))
        .route("/api/v1/das/:da_id", get(detail_handler::<P>))
        .route("/api/v1/das/:da_id/risk", get(risk_handler::<P>))
        .route("/api/v1/das/:da_id/report", get(report_handler::<P>))
        .route("/api/v1/stats", get(stats_handler::<P>))
        .with_state(service)
}

fn error_response(error: PlanningServiceError) -> Response {
    let message = match &error {
        PlanningServiceError::NotFound(_) => "DA not found".to_string(),
        PlanningServiceError::UnknownCouncil(_) => error.to_string(),
    };
    (StatusCode::NOT_FOUND, Json(json!({ "error": message }))).into_response()
}

pub(crate) async fn councils_handler<P>(
    State(service): State<Arc<PlanningService<P>>>,
) -> Response
where
    P: RecordProvider + ?Sized + 'static,
{
    Json(service.councils()).into_response()
}

pub(crate) async fn list_handler<P>(
    State(service): State<Arc<PlanningService<P>>>,
    Query(filter): Query<DaFilter>,
) -> Response
where
    P: RecordProvider + ?Sized + 'static,
{
    Json(service.list(&filter)).into_response()
}

pub(crate) async fn detail_handler<P>(
    State(service): State<Arc<PlanningService<P>>>,
    Path(da_id): Path<String>,
) -> Response
where
    P: RecordProvider + ?Sized + 'static,
{
    match service.detail(&da_id) {
        Ok(detail) => (StatusCode::OK, Json(detail)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn risk_handler<P>(
    State(service): State<Arc<PlanningService<P>>>,
    Path(da_id): Path<String>,
) -> Response
where
    P: RecordProvider + ?Sized + 'static,
{
    match service.risk_profile(&da_id) {
        Ok(profile) => (StatusCode::OK, Json(profile)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn report_handler<P>(
    State(service): State<Arc<PlanningService<P>>>,
    Path(da_id): Path<String>,
) -> Response
where
    P: RecordProvider + ?Sized + 'static,
{
    let today = Local::now().date_naive();
    match service.report(&da_id, today) {
        Ok(report) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            report,
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn stats_handler<P>(
    State(service): State<Arc<PlanningService<P>>>,
) -> Response
where
    P: RecordProvider + ?Sized + 'static,
{
    Json(service.stats()).into_response()
}

pub(crate) async fn themes_handler<P>(
    State(service): State<Arc<PlanningService<P>>>,
    Path(council): Path<String>,
) -> Response
where
    P: RecordProvider + ?Sized + 'static,
{
    match service.themes(&council) {
        Ok(themes) => (StatusCode::OK, Json(themes)).into_response(),
        Err(error) => error_response(error),
    }
}
