//! HTTP handler for the prediction endpoint

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use shared::{PredictionRequest, PredictionResult};

use crate::error::{AppError, AppResult};
use crate::services::PredictionService;
use crate::AppState;

/// Score one prediction request
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictionRequest>, JsonRejection>,
) -> AppResult<Json<PredictionResult>> {
    let Json(request) = payload.map_err(|rejection| AppError::InvalidBody(rejection.body_text()))?;
    tracing::debug!(?request, "Prediction requested");

    let service = PredictionService::new(state.predictor.clone());
    let predicted_yield = service.predict(&request).await?;
    Ok(Json(PredictionResult::success(predicted_yield)))
}
