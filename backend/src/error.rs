//! Error handling for the crop yield prediction server
//!
//! Every error is rendered as `{"error": "<message>"}`, the shape the
//! prediction page already understands.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::PredictionResult;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Request errors
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Validation error: {0}")]
    Validation(String),

    // Model errors
    #[error("Model not loaded")]
    ModelUnavailable,

    #[error("Model service error: {0}")]
    ModelService(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    // Internal errors
    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidBody(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::ModelUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            AppError::ModelService(_) => StatusCode::BAD_GATEWAY,
            AppError::Configuration(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

impl From<shared::FieldError> for AppError {
    fn from(error: shared::FieldError) -> Self {
        AppError::Validation(error.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Log the error for debugging
        if status.is_server_error() {
            tracing::error!("Error: {:?}", self);
        } else {
            tracing::warn!("Rejected request: {}", self);
        }

        (status, Json(PredictionResult::failure(self.to_string()))).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::Validation("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::ModelUnavailable.status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::ModelService("down".into()).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::InternalError(anyhow::anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_field_error_message_kept() {
        let err: AppError = shared::NumericField::Rainfall.check(0.0).unwrap_err().into();
        assert_eq!(
            err.to_string(),
            "Validation error: Les précipitations (mm) doit être strictement supérieur à 0"
        );
    }
}
