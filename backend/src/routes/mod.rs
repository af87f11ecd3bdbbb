//! Route definitions for the prediction server

use std::path::Path;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::{handlers, AppState};

/// API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/predict", post(handlers::predict))
        .route("/test", get(handlers::api_test))
        .route("/health", get(handlers::health_check))
}

/// The prediction page and its static assets
pub fn page_routes(static_dir: &Path) -> Router<AppState> {
    Router::new()
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(static_dir))
}
