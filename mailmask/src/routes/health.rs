// mailmask/src/routes/health.rs

use axum::Json;
use serde_json::{json, Value};

/// Liveness probe. The service holds no connections or external resources,
/// so reachable means healthy.
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
