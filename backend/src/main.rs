//! Crop Yield Prediction - Backend Server

use std::{net::SocketAddr, sync::Arc};

use cyp_server::{
    config::Config, create_app, external::ModelServiceClient, services::YieldPredictor, AppState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    // Initialize tracing
    let json_logs = config.is_production();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cyp_server=debug,tower_http=debug".into()),
        )
        .with((!json_logs).then(tracing_subscriber::fmt::layer))
        .with(json_logs.then(|| tracing_subscriber::fmt::layer().json()))
        .init();

    tracing::info!("Starting Crop Yield Prediction Server");
    tracing::info!("Environment: {}", config.environment);

    let predictor: Option<Arc<dyn YieldPredictor>> = match ModelServiceClient::from_config(&config.model)? {
        Some(client) => {
            tracing::info!("Model endpoint: {}", client.endpoint());
            Some(Arc::new(client))
        }
        None => {
            tracing::warn!("No model endpoint configured, /predict will answer 503");
            None
        }
    };

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!("Serving static files from {}", config.server.static_dir);

    // Build application
    let app = create_app(AppState::new(config, predictor));

    // Start server
    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
