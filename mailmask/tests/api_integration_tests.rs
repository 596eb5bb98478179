// mailmask/tests/api_integration_tests.rs
//! HTTP-level tests for the classify endpoint, driving the router directly
//! with `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use mailmask::detectors::HeuristicNameDetector;
use mailmask::{build_router, AppState};
use mailmask_core::{
    DetectorPolicy, MaskingEngine, PatternConfig, PatternRegistry, RuleBasedClassifier,
};
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_router() -> Router {
    let mut config = PatternConfig::load_default_rules().unwrap();
    config.set_active_rules(&[], &[]);
    let registry = Arc::new(PatternRegistry::compile(&config).unwrap());
    let engine = MaskingEngine::new(registry).with_detector(
        Arc::new(HeuristicNameDetector::new()),
        DetectorPolicy::FailClosed,
    );
    build_router(AppState {
        engine: Arc::new(engine),
        classifier: Arc::new(RuleBasedClassifier),
    })
}

async fn post_classify(body: Value) -> (StatusCode, Value) {
    let response = test_router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/classify_email")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

#[tokio::test]
async fn classify_email_masks_and_classifies() {
    let email = "Contact John Smith at john.smith@example.com or call +1-202-555-0191, \
                 card 4111 1111 1111 1111, DOB 12/08/1990. I need help with an issue.";
    let (status, body) = post_classify(json!({ "email": email })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["input_email_body"], email);
    assert_eq!(
        body["masked_email"],
        "Contact [full_name] at [email] or call [phone_number], \
         card [credit_debit_no], DOB [dob]. I need help with an issue."
    );
    assert_eq!(body["category_of_the_email"], "Support");

    let entities = body["list_of_masked_entities"].as_array().unwrap();
    let labels: Vec<&str> = entities
        .iter()
        .map(|e| e["classification"].as_str().unwrap())
        .collect();
    assert_eq!(
        labels,
        vec!["full_name", "email", "phone_number", "credit_debit_no", "dob"]
    );

    // Wire shape: position pair plus exact original substring.
    let first = &entities[0];
    assert_eq!(first["entity"], "John Smith");
    let position = first["position"].as_array().unwrap();
    assert_eq!(position.len(), 2);
    let (start, end) = (
        position[0].as_u64().unwrap() as usize,
        position[1].as_u64().unwrap() as usize,
    );
    assert_eq!(&email[start..end], "John Smith");
}

#[tokio::test]
async fn missing_email_field_is_a_400() {
    let (status, body) = post_classify(json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing or invalid 'email' field");
}

#[tokio::test]
async fn non_string_email_field_is_a_400() {
    let (status, body) = post_classify(json!({ "email": 123 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing or invalid 'email' field");
}

#[tokio::test]
async fn blank_email_field_is_a_400() {
    let (status, _) = post_classify(json!({ "email": "   " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn email_without_pii_passes_through_unchanged() {
    let email = "just checking in about the meeting";
    let (status, body) = post_classify(json!({ "email": email })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["masked_email"], email);
    assert_eq!(body["list_of_masked_entities"].as_array().unwrap().len(), 0);
    assert_eq!(body["category_of_the_email"], "General");
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
}
