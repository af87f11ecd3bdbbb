//! Model-serving client
//!
//! Client for the HTTP endpoint hosting the trained yield model. The
//! endpoint follows the MLflow `/invocations` convention: one DataFrame
//! record per request row in, one number per row out.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::PredictionRequest;

use crate::config::ModelConfig;
use crate::error::{AppError, AppResult};
use crate::services::YieldPredictor;

/// Client for the model-serving endpoint
#[derive(Clone)]
pub struct ModelServiceClient {
    endpoint: String,
    api_key: Option<String>,
    http_client: Client,
}

/// Invocation body: the request as a single DataFrame record
#[derive(Debug, Serialize)]
pub struct InvocationRequest<'a> {
    pub dataframe_records: Vec<&'a PredictionRequest>,
}

/// Invocation reply
#[derive(Debug, Deserialize)]
pub struct InvocationResponse {
    pub predictions: Vec<f64>,
}

impl ModelServiceClient {
    /// Create a new model-serving client
    pub fn new(endpoint: String, api_key: Option<String>, timeout_secs: u64) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("HTTP client: {}", e)))?;

        Ok(Self {
            endpoint,
            api_key,
            http_client,
        })
    }

    /// Create a client from configuration, if an endpoint is set
    pub fn from_config(config: &ModelConfig) -> AppResult<Option<Self>> {
        match &config.endpoint {
            Some(endpoint) => Ok(Some(Self::new(
                endpoint.clone(),
                config.api_key.clone(),
                config.timeout_secs,
            )?)),
            None => Ok(None),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Score one request and return the raw predictions
    pub async fn invoke(&self, request: &PredictionRequest) -> AppResult<InvocationResponse> {
        let body = InvocationRequest {
            dataframe_records: vec![request],
        };

        let mut http_request = self.http_client.post(&self.endpoint).json(&body);
        if let Some(api_key) = &self.api_key {
            http_request = http_request.header("x-api-key", api_key);
        }

        let response = http_request
            .send()
            .await
            .map_err(|e| AppError::ModelService(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::ModelService(format!(
                "API returned {}: {}",
                status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ModelService(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait]
impl YieldPredictor for ModelServiceClient {
    async fn predict(&self, request: &PredictionRequest) -> AppResult<f64> {
        let response = self.invoke(request).await?;
        response
            .predictions
            .first()
            .copied()
            .ok_or_else(|| AppError::ModelService("Empty prediction list".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invocation_body_shape() {
        let request = PredictionRequest {
            region: "East".to_string(),
            soil_type: "Silt".to_string(),
            crop: "Barley".to_string(),
            rainfall_mm: 500.0,
            temperature_celsius: 18.0,
            fertilizer_used: 0,
            irrigation_used: 1,
            weather_condition: "Cloudy".to_string(),
            days_to_harvest: 90,
        };
        let body = serde_json::to_value(InvocationRequest {
            dataframe_records: vec![&request],
        })
        .unwrap();

        assert_eq!(body["dataframe_records"][0]["Crop"], "Barley");
        assert_eq!(body["dataframe_records"][0]["Days_to_Harvest"], 90);
    }

    #[test]
    fn test_from_config_without_endpoint() {
        let client = ModelServiceClient::from_config(&ModelConfig::default()).unwrap();
        assert!(client.is_none());
    }
}
