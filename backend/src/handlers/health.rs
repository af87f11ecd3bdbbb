//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub model: String,
}

#[derive(Serialize)]
pub struct ApiTestResponse {
    pub status: String,
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let model_status = if state.predictor.is_some() {
        "configured"
    } else {
        "unconfigured"
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model: model_status.to_string(),
    })
}

/// Liveness probe kept for existing clients of `/test`
pub async fn api_test() -> Json<ApiTestResponse> {
    Json(ApiTestResponse {
        status: "API fonctionne !".to_string(),
    })
}
