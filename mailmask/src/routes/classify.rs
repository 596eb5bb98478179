// mailmask/src/routes/classify.rs
//! The `POST /classify_email` endpoint: mask first, then classify the
//! masked text. The classifier never sees the raw body.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::{error, info};
use mailmask_core::EntityMatch;
use serde::Serialize;
use serde_json::{json, Value};

use crate::server::AppState;

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub input_email_body: String,
    pub list_of_masked_entities: Vec<EntityMatch>,
    pub masked_email: String,
    pub category_of_the_email: String,
}

/// Masks PII/PCI spans in the request's email body and classifies the result.
///
/// The body is parsed as a loose JSON object so that a missing or non-string
/// `email` field can be rejected with an explicit 400 instead of a generic
/// deserialization failure. This is the one place where ill-shaped input is
/// handled; the core only ever receives a well-formed string.
pub async fn classify_email_handler(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Response {
    let email_body = payload
        .get("email")
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty());

    let Some(email_body) = email_body else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Missing or invalid 'email' field" })),
        )
            .into_response();
    };

    match state.engine.resolve_and_mask(email_body) {
        Ok(outcome) => {
            let category = state.classifier.classify(&outcome.masked_text);
            info!(
                "masked {} entities, category '{}'",
                outcome.entities.len(),
                category
            );
            (
                StatusCode::OK,
                Json(ClassifyResponse {
                    input_email_body: email_body.to_string(),
                    list_of_masked_entities: outcome.entities,
                    masked_email: outcome.masked_text,
                    category_of_the_email: category,
                }),
            )
                .into_response()
        }
        Err(e) => {
            error!("masking failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}
