//! Prediction service: validates a request and asks the model for a yield

use std::sync::Arc;

use async_trait::async_trait;
use shared::PredictionRequest;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Anything able to score a prediction request
#[async_trait]
pub trait YieldPredictor: Send + Sync {
    async fn predict(&self, request: &PredictionRequest) -> AppResult<f64>;
}

/// Prediction service for serving yield predictions
#[derive(Clone)]
pub struct PredictionService {
    predictor: Option<Arc<dyn YieldPredictor>>,
}

impl PredictionService {
    pub fn new(predictor: Option<Arc<dyn YieldPredictor>>) -> Self {
        Self { predictor }
    }

    /// Check a request with the same rules the prediction page applies
    pub fn validate(request: &PredictionRequest) -> AppResult<()> {
        request.validate()?;
        request.check_bounds()?;
        Ok(())
    }

    /// Validate and score one request
    pub async fn predict(&self, request: &PredictionRequest) -> AppResult<f64> {
        Self::validate(request)?;

        let predictor = self.predictor.as_ref().ok_or(AppError::ModelUnavailable)?;
        let predicted_yield = predictor.predict(request).await?;

        if !predicted_yield.is_finite() {
            return Err(AppError::ModelService(format!(
                "Model returned a non-finite prediction: {}",
                predicted_yield
            )));
        }

        tracing::info!(
            region = %request.region,
            crop = %request.crop,
            predicted_yield,
            "Prediction served"
        );

        Ok(predicted_yield)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedPredictor(f64);

    #[async_trait]
    impl YieldPredictor for FixedPredictor {
        async fn predict(&self, _request: &PredictionRequest) -> AppResult<f64> {
            Ok(self.0)
        }
    }

    fn request() -> PredictionRequest {
        PredictionRequest {
            region: "North".to_string(),
            soil_type: "Peaty".to_string(),
            crop: "Soybean".to_string(),
            rainfall_mm: 640.0,
            temperature_celsius: 22.0,
            fertilizer_used: 1,
            irrigation_used: 1,
            weather_condition: "Sunny".to_string(),
            days_to_harvest: 100,
        }
    }

    #[tokio::test]
    async fn test_predict_returns_model_value() {
        let service = PredictionService::new(Some(Arc::new(FixedPredictor(4.75))));
        assert_eq!(service.predict(&request()).await.unwrap(), 4.75);
    }

    #[tokio::test]
    async fn test_predict_without_model() {
        let service = PredictionService::new(None);
        let err = service.predict(&request()).await.unwrap_err();
        assert!(matches!(err, AppError::ModelUnavailable));
    }

    #[tokio::test]
    async fn test_validation_runs_before_model() {
        let service = PredictionService::new(None);
        let mut invalid = request();
        invalid.temperature_celsius = -50.0;
        let err = service.predict(&invalid).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_non_finite_prediction_rejected() {
        let service = PredictionService::new(Some(Arc::new(FixedPredictor(f64::NAN))));
        let err = service.predict(&request()).await.unwrap_err();
        assert!(matches!(err, AppError::ModelService(_)));
    }
}
