use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::IntoResponse;
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use screening_core::models::instrument::InstrumentId;
use screening_instruments::error::InstrumentError;

use crate::app::build_router;
use crate::config::ServiceConfig;
use crate::error::ApiError;
use crate::state::AppState;

fn router() -> Router {
    build_router(AppState {
        config: Arc::new(ServiceConfig {
            service_name: "screening-test".to_string(),
            cors_origin: "*".to_string(),
        }),
    })
    .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_raw(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

fn post(uri: &str, body: Value) -> Request<Body> {
    post_raw(uri, body.to_string())
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = router().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

/// `{"1": option, "2": option, ...}` for the first `count` positions.
fn uniform_responses(count: u32, option: u32) -> Value {
    (1..=count)
        .map(|p| (p.to_string(), json!(option)))
        .collect::<serde_json::Map<_, _>>()
        .into()
}

#[test]
fn instrument_errors_map_to_statuses() {
    let cases = [
        (
            InstrumentError::UnknownInstrument("moca".to_string()),
            StatusCode::NOT_FOUND,
        ),
        (
            InstrumentError::IncompleteResponse {
                instrument: InstrumentId::Phq9,
                missing: vec![3],
            },
            StatusCode::UNPROCESSABLE_ENTITY,
        ),
        (
            InstrumentError::InvalidOption {
                instrument: InstrumentId::Gad7,
                position: 1,
                option: 7,
                option_count: 4,
            },
            StatusCode::UNPROCESSABLE_ENTITY,
        ),
        (
            InstrumentError::UnknownItem {
                instrument: InstrumentId::Gad7,
                position: 8,
            },
            StatusCode::UNPROCESSABLE_ENTITY,
        ),
        (
            InstrumentError::InconsistentResult {
                instrument: InstrumentId::Ybocs,
                reason: "severity".to_string(),
            },
            StatusCode::UNPROCESSABLE_ENTITY,
        ),
    ];

    for (error, expected) in cases {
        let message = error.to_string();
        assert_eq!(ApiError::from(error).into_response().status(), expected, "{message}");
    }
}

#[tokio::test]
async fn health_reports_configured_name() {
    let (status, body) = send(get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "screening-test");
}

#[tokio::test]
async fn lists_all_instruments() {
    let (status, body) = send(get("/instruments")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(3));
    assert_eq!(body[2]["id"], "ybocs");
    assert_eq!(body[2]["item_count"], 10);
}

#[tokio::test]
async fn unknown_instrument_is_not_found() {
    let (status, body) = send(get("/instruments/moca")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "unknown instrument: moca");
}

#[tokio::test]
async fn option_values_for_item() {
    let (status, body) = send(get("/instruments/ybocs/items/4/options")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["label"], "Try to resist all the time");
    assert_eq!(body[4]["value"], 4);
}

#[tokio::test]
async fn option_values_for_missing_item_is_not_found() {
    let (status, _) = send(get("/instruments/phq9/items/10/options")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn scores_complete_responses() {
    let request = post(
        "/instruments/phq9/score",
        json!({ "responses": uniform_responses(9, 1) }),
    );
    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 9);
    assert_eq!(body["severity"], "mild");
}

#[tokio::test]
async fn incomplete_responses_are_unprocessable() {
    let request = post(
        "/instruments/gad7/score",
        json!({ "responses": uniform_responses(6, 0) }),
    );
    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("missing item(s) [7]"));
}

#[tokio::test]
async fn out_of_range_option_is_unprocessable() {
    let mut responses = uniform_responses(7, 0);
    responses["3"] = json!(4);
    let (status, _) = send(post("/instruments/gad7/score", json!({ "responses": responses }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn response_for_unknown_item_is_unprocessable() {
    let mut responses = uniform_responses(7, 0);
    responses["8"] = json!(0);
    let (status, _) = send(post("/instruments/gad7/score", json!({ "responses": responses }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let request = post_raw("/instruments/gad7/score", "{\"responses\": ".to_string());
    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn summary_renders_scored_results() {
    let (_, phq9) = send(post(
        "/instruments/phq9/score",
        json!({ "responses": uniform_responses(9, 0) }),
    ))
    .await;

    let (status, body) = send(post("/summary", json!({ "results": [phq9] }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["summary"],
        "PHQ9: 0\nPatient endorses minimal depressive symptoms of no specific symptoms."
    );
}

#[tokio::test]
async fn summary_rejects_contradictory_result() {
    let forged = json!({
        "instrument": "ybocs",
        "total": 40,
        "subscales": [],
        "severity": "minimal",
        "symptoms": [],
        "item_values": [4, 4, 4, 4, 4, 4, 4, 4, 4, 4]
    });

    let (status, body) = send(post("/summary", json!({ "results": [forged] }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("inconsistent score result"));
}

#[tokio::test]
async fn evaluate_requires_an_instrument() {
    let (_, session) = send(post_raw("/sessions", String::new())).await;

    let request = post(
        "/sessions/evaluate",
        json!({ "session": session, "instruments": [] }),
    );
    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "at least one instrument is required");
}

#[tokio::test]
async fn session_round_trip() {
    let (status, mut session) = send(post_raw("/sessions", String::new())).await;
    assert_eq!(status, StatusCode::OK);

    for position in 1..=7 {
        let request = post(
            "/sessions/respond",
            json!({ "session": session, "instrument": "gad7", "position": position, "option": 1 }),
        );
        let (status, updated) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        session = updated;
    }

    let request = post(
        "/sessions/evaluate",
        json!({ "session": session, "instruments": ["gad7"], "with_labels": false }),
    );
    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"][0]["total"], 7);
    assert!(body["summary"].as_str().unwrap().starts_with("Patient endorses mild anxious"));
}

#[tokio::test]
async fn respond_rejects_out_of_range_option() {
    let (_, session) = send(post_raw("/sessions", String::new())).await;
    let request = post(
        "/sessions/respond",
        json!({ "session": session, "instrument": "phq9", "position": 1, "option": 4 }),
    );
    let (status, _) = send(request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn evaluate_unanswered_instrument_is_unprocessable() {
    let (_, session) = send(post_raw("/sessions", String::new())).await;
    let request = post(
        "/sessions/evaluate",
        json!({ "session": session, "instruments": ["ybocs"] }),
    );
    let (status, _) = send(request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}
