use super::common::*;
use axum::body::{to_bytes, Body};
use axum::extract::{Path, State};
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use crate::planning::router::detail_handler;

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request builds")
}

#[tokio::test]
async fn lists_known_councils() {
    let response = sample_router()
        .oneshot(get("/api/v1/councils"))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body, serde_json::json!(["Parramatta", "Blacktown", "Hornsby"]));
}

#[tokio::test]
async fn filters_listing_by_query() {
    let response = sample_router()
        .oneshot(get("/api/v1/das?council=hornsby&outcome=refused"))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["total"], 2);
    assert_eq!(body["results"][0]["id"], "DA-HRN-003");
    assert_eq!(body["results"][0]["DA_outcome"], "Refused");
}

#[tokio::test]
async fn detail_includes_comparables_from_same_council() {
    let response = sample_router()
        .oneshot(get("/api/v1/das/DA-PAR-002"))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["id"], "DA-PAR-002");
    assert_eq!(body["FSR"], "2.1:1");

    let score = body["approval_score"].as_u64().expect("numeric score");
    assert!(score <= 100);

    let similar = body["similar_projects"].as_array().expect("array");
    assert_eq!(similar.len(), 5);
    for project in similar {
        assert_eq!(project["council"], "Parramatta");
        assert_ne!(project["id"], "DA-PAR-002");
    }
}

#[tokio::test]
async fn unknown_record_is_not_found() {
    for uri in [
        "/api/v1/das/DA-404",
        "/api/v1/das/DA-404/risk",
        "/api/v1/das/DA-404/report",
    ] {
        let response = sample_router()
            .oneshot(get(uri))
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
        let body = json_body(response).await;
        assert_eq!(body["error"], "DA not found");
    }
}

#[tokio::test]
async fn risk_profile_carries_level_and_drivers() {
    let response = sample_router()
        .oneshot(get("/api/v1/das/DA-HRN-003/risk"))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let level = body["level"].as_str().expect("level string");
    assert!(["Low", "Moderate", "High"].contains(&level));
    let drivers = body["drivers"].as_array().expect("array");
    assert!(!drivers.is_empty() && drivers.len() <= 3);
}

#[tokio::test]
async fn report_is_served_as_plain_text() {
    let response = sample_router()
        .oneshot(get("/api/v1/das/DA-BLK-002/report"))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/plain"));

    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let text = String::from_utf8(bytes.to_vec()).expect("utf8 report");
    assert!(text.contains("DA ID: DA-BLK-002"));
    assert!(text.contains("- Property address: 9 Flushcombe Rd, Blacktown"));
}

#[tokio::test]
async fn stats_cover_the_whole_pool() {
    let response = sample_router()
        .oneshot(get("/api/v1/stats"))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["total_das"], 18);
    assert_eq!(body["overall_approval_rate"], 44.4);
    assert_eq!(body["councils"].as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn themes_reject_unknown_councils() {
    let ok = sample_router()
        .oneshot(get("/api/v1/councils/blacktown/themes"))
        .await
        .expect("router responds");
    assert_eq!(ok.status(), StatusCode::OK);
    let body = json_body(ok).await;
    assert_eq!(body["council"], "Blacktown");
    assert_eq!(body["refusal_themes"][0], "Insufficient parking provision");

    let missing = sample_router()
        .oneshot(get("/api/v1/councils/Atlantis/themes"))
        .await
        .expect("router responds");
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    let body = json_body(missing).await;
    assert_eq!(body["error"], "unknown council: Atlantis");
}

#[tokio::test]
async fn detail_handler_scores_the_reference_pool() {
    let response = detail_handler(State(scoring_service()), Path("T".to_string())).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["approval_score"], 58);
    assert_eq!(body["similar_projects"][0]["id"], "N-09");
    assert_eq!(body["similar_projects"][0]["similarity_score"], 0.9);
}
