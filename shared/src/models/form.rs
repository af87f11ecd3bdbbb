//! Raw form input as read from the prediction page

use thiserror::Error;

use crate::models::PredictionRequest;
use crate::validation::{FieldError, NumericField};

/// Message shown when a required select or input is left empty
pub const MISSING_FIELDS_MESSAGE: &str = "Veuillez compléter tous les champs obligatoires.";

/// Values of the prediction form, exactly as the page holds them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub region: String,
    pub soil_type: String,
    pub crop: String,
    pub rainfall: String,
    pub temperature: String,
    pub weather_condition: String,
    pub growing_days: String,
    pub fertilizer_used: bool,
    pub irrigation_used: bool,
}

/// Reason a form could not be turned into a request
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("{}", MISSING_FIELDS_MESSAGE)]
    MissingRequired,

    #[error("{source}")]
    Invalid {
        field: NumericField,
        #[source]
        source: FieldError,
    },
}

impl FormError {
    /// Field that should receive focus, if any
    pub fn field(&self) -> Option<NumericField> {
        match self {
            FormError::MissingRequired => None,
            FormError::Invalid { field, .. } => Some(*field),
        }
    }
}

impl FormInput {
    /// Whether any of the required fields is empty.
    ///
    /// Rainfall and temperature are not part of this check; an empty value
    /// there is reported by the numeric validator instead.
    pub fn missing_required(&self) -> bool {
        [
            &self.region,
            &self.soil_type,
            &self.crop,
            &self.weather_condition,
            &self.growing_days,
        ]
        .iter()
        .any(|v| v.is_empty())
    }

    /// Raw text of a numeric field
    pub fn numeric(&self, field: NumericField) -> &str {
        match field {
            NumericField::Rainfall => &self.rainfall,
            NumericField::Temperature => &self.temperature,
            NumericField::GrowingDays => &self.growing_days,
        }
    }

    /// Validate the form and build the request payload.
    ///
    /// Stops at the first failure: required fields, then rainfall,
    /// temperature and growing days.
    pub fn to_request(&self) -> Result<PredictionRequest, FormError> {
        if self.missing_required() {
            return Err(FormError::MissingRequired);
        }

        let mut values = [0.0; 3];
        for (slot, field) in values.iter_mut().zip(NumericField::ALL) {
            *slot = field
                .validate(self.numeric(field))
                .map_err(|source| FormError::Invalid { field, source })?;
        }
        let [rainfall_mm, temperature_celsius, growing_days] = values;

        Ok(PredictionRequest {
            region: self.region.clone(),
            soil_type: self.soil_type.clone(),
            crop: self.crop.clone(),
            rainfall_mm,
            temperature_celsius,
            fertilizer_used: u8::from(self.fertilizer_used),
            irrigation_used: u8::from(self.irrigation_used),
            weather_condition: self.weather_condition.clone(),
            // Fractional day counts are truncated.
            days_to_harvest: growing_days.trunc() as i32,
        })
    }
}
