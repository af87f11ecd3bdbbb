//! Client for the `/predict` endpoint

use shared::{PredictionRequest, PredictionResult};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

/// Default endpoint, relative to the page origin
pub const PREDICT_ENDPOINT: &str = "/predict";

/// The request never produced a usable reply
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    #[error("Erreur HTTP: {0}")]
    Status(u16),

    #[error("{0}")]
    Network(String),

    #[error("{0}")]
    Decode(String),
}

/// Sends one prediction request and interprets the reply
#[allow(async_fn_in_trait)]
pub trait PredictionClient {
    async fn predict(&self, request: &PredictionRequest)
        -> Result<PredictionResult, TransportError>;
}

/// Browser `fetch` implementation
#[derive(Debug, Clone)]
pub struct FetchClient {
    endpoint: String,
}

impl FetchClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::new(PREDICT_ENDPOINT)
    }
}

impl PredictionClient for FetchClient {
    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResult, TransportError> {
        let body = serde_json::to_string(request)
            .map_err(|e| TransportError::Decode(format!("Invalid request: {}", e)))?;

        let headers = Headers::new().map_err(js_error)?;
        headers
            .set("Content-Type", "application/json")
            .map_err(js_error)?;

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(&body));

        let http_request =
            Request::new_with_str_and_init(&self.endpoint, &init).map_err(js_error)?;

        let window = web_sys::window()
            .ok_or_else(|| TransportError::Network("No window available".to_string()))?;

        let response: Response = JsFuture::from(window.fetch_with_request(&http_request))
            .await
            .map_err(js_error)?
            .dyn_into()
            .map_err(js_error)?;

        if !response.ok() {
            return Err(TransportError::Status(response.status()));
        }

        let text = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?
            .as_string()
            .unwrap_or_default();

        let value: serde_json::Value =
            serde_json::from_str(&text).map_err(|e| TransportError::Decode(e.to_string()))?;

        Ok(PredictionResult::from_value(&value))
    }
}

/// Extract the message of a rejected promise or thrown exception
fn js_error(value: JsValue) -> TransportError {
    let message = match value.dyn_ref::<js_sys::Error>() {
        Some(error) => String::from(error.message()),
        None => value.as_string().unwrap_or_else(|| format!("{:?}", value)),
    };
    TransportError::Network(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        assert_eq!(TransportError::Status(500).to_string(), "Erreur HTTP: 500");
        assert_eq!(
            TransportError::Network("Failed to fetch".into()).to_string(),
            "Failed to fetch"
        );
    }

    #[test]
    fn test_default_endpoint() {
        assert_eq!(FetchClient::default().endpoint(), "/predict");
    }
}
