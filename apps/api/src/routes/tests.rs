use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::build_router;
use crate::classifier::PlacementClassifier;
use crate::config::Config;
use crate::engine::metrics::MetricSet;
use crate::errors::AppError;
use crate::state::AppState;
use crate::store::MemoryStore;

struct FixedClassifier(f64);

#[async_trait]
impl PlacementClassifier for FixedClassifier {
    async fn predict(&self, _metrics: &MetricSet) -> Result<f64, AppError> {
        Ok(self.0)
    }
}

fn test_state(probability: Option<f64>) -> AppState {
    AppState {
        store: Arc::new(MemoryStore::new()),
        classifier: probability
            .map(|p| Arc::new(FixedClassifier(p)) as Arc<dyn PlacementClassifier>),
        config: Config::default(),
    }
}

async fn send(
    state: &AppState,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = build_router(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn register(state: &AppState, email: &str) -> String {
    let (status, body) = send(
        state,
        "POST",
        "/api/register",
        None,
        Some(json!({ "name": "Asha", "email": email, "password": "secret" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["token"].as_str().unwrap().to_string()
}

fn metrics_payload() -> Value {
    json!({ "cgpa": 6.8, "dsa_score": 45, "projects": 1, "communication": 6, "internships": 0 })
}

#[tokio::test]
async fn health_reports_model_state() {
    let (status, body) = send(&test_state(None), "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["model_loaded"], false);
    assert_eq!(body["store"], "memory");
    assert!(body["timestamp"].is_string());

    let (_, body) = send(&test_state(Some(0.5)), "GET", "/api/health", None, None).await;
    assert_eq!(body["model_loaded"], true);
}

#[tokio::test]
async fn register_then_login() {
    let state = test_state(None);
    register(&state, "Asha@Example.com ").await;

    let (status, body) = send(
        &state,
        "POST",
        "/api/login",
        None,
        Some(json!({ "email": "asha@example.com", "password": "secret" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["email"], "asha@example.com");
    assert!(body["user"].get("password_hash").is_none());

    let (status, _) = send(
        &state,
        "POST",
        "/api/login",
        None,
        Some(json!({ "email": "asha@example.com", "password": "wrong" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn register_rejects_duplicates_and_blanks() {
    let state = test_state(None);
    register(&state, "a@example.com").await;

    let (status, body) = send(
        &state,
        "POST",
        "/api/register",
        None,
        Some(json!({ "name": "Other", "email": "a@example.com", "password": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Email already registered");

    let (status, _) = send(
        &state,
        "POST",
        "/api/register",
        None,
        Some(json!({ "name": " ", "email": "b@example.com", "password": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn predict_requires_session() {
    let state = test_state(Some(0.7));
    let (status, body) =
        send(&state, "POST", "/api/predict", None, Some(metrics_payload())).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");

    let (status, _) = send(
        &state,
        "POST",
        "/api/predict",
        Some("not-a-token"),
        Some(metrics_payload()),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn predict_returns_full_bundle_and_saves_history() {
    let state = test_state(Some(0.62));
    let token = register(&state, "a@example.com").await;

    let (status, body) = send(
        &state,
        "POST",
        "/api/predict",
        Some(&token),
        Some(metrics_payload()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["placement_probability"], 62.0);
    assert_eq!(body["recommendation_level"]["level"], "Moderate");
    assert_eq!(body["saved_to_history"], true);
    assert!(body["readiness_score"].as_f64().unwrap() > 0.0);
    assert_eq!(body["weak_skills"].as_array().unwrap().len(), 5);
    assert_eq!(body["roadmap_tasks"].as_array().unwrap().len(), 7);
    assert_eq!(body["ai_recommendations"].as_array().unwrap().len(), 6);
    assert_eq!(body["skill_analysis"]["skill_gaps"][0]["skill_key"], "internships");
    assert!(body["strongest_skill"].is_string());
    assert!(body["placement_category"].is_string());

    let prediction_id = body["prediction_id"].as_str().unwrap().to_string();

    let (status, history) = send(&state, "GET", "/api/history", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(history["count"], 1);
    assert_eq!(history["data"][0]["id"], prediction_id.as_str());
    assert_eq!(history["data"][0]["input_metrics"]["dsa_score"], 45);

    let uri = format!("/api/history/{prediction_id}");
    let (status, entry) = send(&state, "GET", &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(entry["data"]["placement_probability"], 62.0);
}

#[tokio::test]
async fn predict_rejects_missing_metric() {
    let state = test_state(Some(0.62));
    let token = register(&state, "a@example.com").await;

    let (status, body) = send(
        &state,
        "POST",
        "/api/predict",
        Some(&token),
        Some(json!({ "cgpa": 7.0, "dsa_score": 50, "projects": 2, "communication": 5 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Missing field: internships");
}

#[tokio::test]
async fn predict_without_model_is_unavailable() {
    let state = test_state(None);
    let token = register(&state, "a@example.com").await;

    let (status, body) = send(
        &state,
        "POST",
        "/api/predict",
        Some(&token),
        Some(metrics_payload()),
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"]["code"], "MODEL_UNAVAILABLE");
}

#[tokio::test]
async fn analyze_omits_probability_fields() {
    let state = test_state(None);
    let (status, body) = send(
        &state,
        "POST",
        "/api/analyze",
        None,
        Some(json!({ "cgpa": 10, "dsa_score": 100, "projects": 6, "communication": 10, "internships": 4 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.get("placement_probability").is_none());
    assert!(body.get("recommendation_level").is_none());
    assert!(body.get("ai_recommendations").is_none());
    assert_eq!(body["weak_skills"], json!([]));
    assert_eq!(body["skill_analysis"]["skill_gaps"], json!([]));
    assert_eq!(body["roadmap_tasks"].as_array().unwrap().len(), 5);
    assert_eq!(body["roadmap_tasks"][0]["day"], 1);
}

#[tokio::test]
async fn analyze_is_lenient_about_missing_metrics() {
    let state = test_state(None);
    let (status, body) =
        send(&state, "POST", "/api/analyze", None, Some(json!({ "cgpa": 9.0 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["skill_analysis"]["scores"]["dsa_score"], 0.0);
}

#[tokio::test]
async fn analyze_rejects_malformed_json() {
    let state = test_state(None);
    let request = Request::builder()
        .method("POST")
        .uri("/api/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = build_router(state).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn history_entry_is_owner_only() {
    let state = test_state(Some(0.9));
    let owner = register(&state, "owner@example.com").await;
    let other = register(&state, "other@example.com").await;

    let (_, body) = send(
        &state,
        "POST",
        "/api/predict",
        Some(&owner),
        Some(metrics_payload()),
    )
    .await;
    let uri = format!("/api/history/{}", body["prediction_id"].as_str().unwrap());

    let (status, _) = send(&state, "GET", &uri, Some(&other), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn analytics_and_profile_track_predictions() {
    let state = test_state(Some(0.4));
    let token = register(&state, "a@example.com").await;

    let (_, analytics) = send(&state, "GET", "/api/analytics", Some(&token), None).await;
    assert_eq!(analytics["data"]["total_predictions"], 0);

    for payload in [
        metrics_payload(),
        json!({ "cgpa": 8.5, "dsa_score": 80, "projects": 4, "communication": 8, "internships": 2 }),
    ] {
        let (status, _) = send(&state, "POST", "/api/predict", Some(&token), Some(payload)).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, analytics) = send(&state, "GET", "/api/analytics", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(analytics["data"]["total_predictions"], 2);
    assert_eq!(analytics["data"]["improvement"]["direction"], "up");
    assert_eq!(analytics["data"]["trend"].as_array().unwrap().len(), 2);

    let (_, summary) = send(&state, "GET", "/api/analytics/summary", Some(&token), None).await;
    assert_eq!(summary["data"]["total_predictions"], 2);
    assert_eq!(summary["data"]["average_probability"], 40.0);

    let (status, profile) = send(&state, "GET", "/api/profile", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["stats"]["total_predictions"], 2);
}

async fn send_raw(
    state: &AppState,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method("POST").uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();

    let response = build_router(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn history_with_unparseable_limit_uses_default() {
    let state = test_state(Some(0.7));
    let token = register(&state, "limit@example.com").await;
    for _ in 0..2 {
        let payload = Some(metrics_payload());
        let (status, _) = send(&state, "POST", "/api/predict", Some(&token), payload).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(&state, "GET", "/api/history?limit=abc", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);

    let (status, body) = send(&state, "GET", "/api/history?limit=1", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
}

#[tokio::test]
async fn malformed_register_body_uses_error_envelope() {
    let state = test_state(None);
    let (status, body) =
        send_raw(&state, "/api/register", Some("application/json"), "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(body["error"]["message"].is_string());
}

#[tokio::test]
async fn login_without_json_content_type_uses_error_envelope() {
    let state = test_state(None);
    let (status, body) = send_raw(
        &state,
        "/api/login",
        None,
        r#"{"email":"a@example.com","password":"x"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}
