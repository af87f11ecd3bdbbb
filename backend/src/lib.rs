//! Crop Yield Prediction - Backend Server
//!
//! Hosts the prediction page and answers `POST /predict` by forwarding each
//! validated request to the model-serving endpoint.

use std::{path::Path, sync::Arc};

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;
use services::YieldPredictor;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub predictor: Option<Arc<dyn YieldPredictor>>,
}

impl AppState {
    pub fn new(config: Config, predictor: Option<Arc<dyn YieldPredictor>>) -> Self {
        Self {
            config: Arc::new(config),
            predictor,
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_dir = Path::new(&state.config.server.static_dir).to_path_buf();

    Router::new()
        .merge(routes::api_routes())
        .merge(routes::page_routes(&static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
