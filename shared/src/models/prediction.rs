//! Prediction request and result models
//!
//! Field names on the wire match the columns the yield model was trained on.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::validation::{FieldError, NumericField};

/// One yield-prediction query, built fresh for every submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PredictionRequest {
    #[serde(rename = "Region")]
    #[validate(length(min = 1))]
    pub region: String,

    #[serde(rename = "Soil_Type")]
    #[validate(length(min = 1))]
    pub soil_type: String,

    #[serde(rename = "Crop")]
    #[validate(length(min = 1))]
    pub crop: String,

    #[serde(rename = "Rainfall_mm")]
    pub rainfall_mm: f64,

    #[serde(rename = "Temperature_Celsius")]
    pub temperature_celsius: f64,

    #[serde(rename = "Fertilizer_Used")]
    #[validate(range(min = 0, max = 1))]
    pub fertilizer_used: u8,

    #[serde(rename = "Irrigation_Used")]
    #[validate(range(min = 0, max = 1))]
    pub irrigation_used: u8,

    #[serde(rename = "Weather_Condition")]
    #[validate(length(min = 1))]
    pub weather_condition: String,

    #[serde(rename = "Days_to_Harvest")]
    #[validate(range(min = 1, max = 365))]
    pub days_to_harvest: i32,
}

impl PredictionRequest {
    /// Check rainfall and temperature against the same bounds the form uses
    pub fn check_bounds(&self) -> Result<(), FieldError> {
        NumericField::Rainfall.check(self.rainfall_mm)?;
        NumericField::Temperature.check(self.temperature_celsius)?;
        Ok(())
    }
}

/// Reply from the `/predict` endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_yield: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PredictionResult {
    pub fn success(predicted_yield: f64) -> Self {
        Self {
            predicted_yield: Some(predicted_yield),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            predicted_yield: None,
            error: Some(message.into()),
        }
    }

    /// Interpret an arbitrary JSON reply.
    ///
    /// A yield sent as a numeric string is accepted. Anything else that is
    /// not a finite number leaves `predicted_yield` empty instead of failing,
    /// so the caller can show "N/A" rather than a transport error.
    pub fn from_value(value: &Value) -> Self {
        let predicted_yield = match value.get("predicted_yield") {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
        .filter(|v| v.is_finite());

        let error = match value.get("error") {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            Some(other) if !is_falsy(other) => Some(other.to_string()),
            _ => None,
        };

        Self {
            predicted_yield,
            error,
        }
    }
}

/// Values a browser treats as false in a boolean context
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_request() -> PredictionRequest {
        PredictionRequest {
            region: "North".to_string(),
            soil_type: "Loam".to_string(),
            crop: "Rice".to_string(),
            rainfall_mm: 750.5,
            temperature_celsius: 25.3,
            fertilizer_used: 1,
            irrigation_used: 0,
            weather_condition: "Sunny".to_string(),
            days_to_harvest: 120,
        }
    }

    #[test]
    fn test_request_wire_names() {
        let value = serde_json::to_value(sample_request()).unwrap();
        assert_eq!(
            value,
            json!({
                "Region": "North",
                "Soil_Type": "Loam",
                "Crop": "Rice",
                "Rainfall_mm": 750.5,
                "Temperature_Celsius": 25.3,
                "Fertilizer_Used": 1,
                "Irrigation_Used": 0,
                "Weather_Condition": "Sunny",
                "Days_to_Harvest": 120
            })
        );
    }

    #[test]
    fn test_request_validation() {
        assert!(sample_request().validate().is_ok());

        let mut empty_crop = sample_request();
        empty_crop.crop.clear();
        assert!(empty_crop.validate().is_err());

        let mut flag = sample_request();
        flag.irrigation_used = 2;
        assert!(flag.validate().is_err());

        let mut days = sample_request();
        days.days_to_harvest = 400;
        assert!(days.validate().is_err());
    }

    #[test]
    fn test_request_bounds() {
        assert!(sample_request().check_bounds().is_ok());

        let mut dry = sample_request();
        dry.rainfall_mm = 0.0;
        assert!(dry.check_bounds().is_err());

        let mut hot = sample_request();
        hot.temperature_celsius = 61.0;
        assert!(hot.check_bounds().is_err());
    }

    #[test]
    fn test_result_from_value() {
        assert_eq!(
            PredictionResult::from_value(&json!({"predicted_yield": 4.2})),
            PredictionResult::success(4.2)
        );
        assert_eq!(
            PredictionResult::from_value(&json!({"predicted_yield": "3.5"})),
            PredictionResult::success(3.5)
        );
        assert_eq!(
            PredictionResult::from_value(&json!({"error": "model unavailable"})),
            PredictionResult::failure("model unavailable")
        );
        assert_eq!(
            PredictionResult::from_value(&json!({"predicted_yield": null})),
            PredictionResult::default()
        );
        assert_eq!(
            PredictionResult::from_value(&json!({"predicted_yield": "abc"})),
            PredictionResult::default()
        );
        assert_eq!(PredictionResult::from_value(&json!([])), PredictionResult::default());
    }

    #[test]
    fn test_falsy_error_treated_as_missing() {
        for error in [json!(false), json!(0), json!(0.0), json!(""), json!(null)] {
            assert_eq!(
                PredictionResult::from_value(&json!({ "error": error })),
                PredictionResult::default()
            );
        }
        assert_eq!(
            PredictionResult::from_value(&json!({"error": 503})).error.as_deref(),
            Some("503")
        );
        assert_eq!(
            PredictionResult::from_value(&json!({"error": true})).error.as_deref(),
            Some("true")
        );
    }

    #[test]
    fn test_result_serialization_skips_empty_fields() {
        assert_eq!(
            serde_json::to_string(&PredictionResult::success(2.5)).unwrap(),
            r#"{"predicted_yield":2.5}"#
        );
        assert_eq!(
            serde_json::to_string(&PredictionResult::failure("boom")).unwrap(),
            r#"{"error":"boom"}"#
        );
    }
}
