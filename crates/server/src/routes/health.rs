//! Health check endpoint

use axum::{Json, extract::State};
use serde::Serialize;

use crate::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    credentials: &'static str,
}

/// GET /health - Liveness plus whether platform credentials are configured.
///
/// The platform itself is not contacted.
pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    let credentials = if state.credentials.is_some() {
        "configured"
    } else {
        "missing"
    };

    Json(HealthResponse {
        status: "healthy",
        credentials,
    })
}
