//! Validation utilities for the crop yield prediction form
//!
//! The same rules run in the browser (through the WASM module) and on the
//! server, so a request the page accepts is never rejected for a bound the
//! page did not check.

use thiserror::Error;

/// Error produced by the numeric field validator.
///
/// Messages are the ones displayed to users of the prediction page.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("{label} doit être un nombre valide")]
    NotANumber { label: String },

    #[error("{label} doit être strictement supérieur à {min}")]
    TooLow { label: String, min: f64 },

    #[error("{label} ne doit pas dépasser {max}")]
    TooHigh { label: String, max: f64 },

    #[error("{label} doit être un nombre fini")]
    NotFinite { label: String },
}

// ============================================================================
// Field Validator
// ============================================================================

/// Validate a raw form value as a real number in `(min, max]`.
///
/// Empty, whitespace-only and unparsable values fail first. The lower bound
/// is strict and the upper bound inclusive; finiteness is checked last.
pub fn validate_positive_real(
    value: &str,
    label: &str,
    min: f64,
    max: Option<f64>,
) -> Result<f64, FieldError> {
    let parsed = match parse_number(value) {
        Some(v) => v,
        None => {
            return Err(FieldError::NotANumber {
                label: label.to_string(),
            })
        }
    };

    check_bounds(parsed, label, min, max)?;
    Ok(parsed)
}

/// Parse a form value the way the browser's `Number()` does.
///
/// `f64::from_str` also accepts `inf`, `infinity` and `nan` in any case;
/// the only non-digit spelling a browser takes is `Infinity`.
fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    let unsigned = trimmed.trim_start_matches(['+', '-']);
    if unsigned.starts_with(|c: char| c.is_ascii_alphabetic()) && unsigned != "Infinity" {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Apply the `(min, max]` bounds and the finiteness check to a number.
pub fn check_bounds(value: f64, label: &str, min: f64, max: Option<f64>) -> Result<(), FieldError> {
    if value.is_nan() {
        return Err(FieldError::NotANumber {
            label: label.to_string(),
        });
    }
    if value <= min {
        return Err(FieldError::TooLow {
            label: label.to_string(),
            min,
        });
    }
    if let Some(max) = max {
        if value > max {
            return Err(FieldError::TooHigh {
                label: label.to_string(),
                max,
            });
        }
    }
    if !value.is_finite() {
        return Err(FieldError::NotFinite {
            label: label.to_string(),
        });
    }
    Ok(())
}

// ============================================================================
// Numeric Fields
// ============================================================================

/// The three numeric inputs of the prediction form, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericField {
    Rainfall,
    Temperature,
    GrowingDays,
}

impl NumericField {
    /// Submit-time validation order
    pub const ALL: [NumericField; 3] = [
        NumericField::Rainfall,
        NumericField::Temperature,
        NumericField::GrowingDays,
    ];

    /// Label used in error messages
    pub fn label(self) -> &'static str {
        match self {
            NumericField::Rainfall => "Les précipitations (mm)",
            NumericField::Temperature => "La température (°C)",
            NumericField::GrowingDays => "La durée de croissance (jours)",
        }
    }

    /// Exclusive lower bound
    pub fn min(self) -> f64 {
        match self {
            NumericField::Rainfall => 0.0,
            NumericField::Temperature => -50.0,
            // Strict check: a value of exactly 1 day is rejected.
            NumericField::GrowingDays => 1.0,
        }
    }

    /// Inclusive upper bound
    pub fn max(self) -> Option<f64> {
        match self {
            NumericField::Rainfall => Some(10000.0),
            NumericField::Temperature => Some(60.0),
            NumericField::GrowingDays => Some(365.0),
        }
    }

    /// Validate a raw form value for this field
    pub fn validate(self, value: &str) -> Result<f64, FieldError> {
        validate_positive_real(value, self.label(), self.min(), self.max())
    }

    /// Check an already-parsed value against this field's bounds
    pub fn check(self, value: f64) -> Result<(), FieldError> {
        check_bounds(value, self.label(), self.min(), self.max())
    }
}
