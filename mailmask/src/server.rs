// mailmask/src/server.rs
//! Application state and router construction.
//!
//! The engine and classifier are built once at startup and injected here;
//! neither is ever reached through process-global state.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use mailmask_core::{Classifier, MaskingEngine};

use crate::routes::{classify_email_handler, health_handler};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<MaskingEngine>,
    pub classifier: Arc<dyn Classifier>,
}

/// Builds the service router over the given state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/classify_email", post(classify_email_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}
