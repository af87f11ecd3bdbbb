//! Common types used across the platform

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Color band of a rendered yield prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YieldLevel {
    Low,
    Medium,
    High,
}

impl YieldLevel {
    /// Classify a yield already rounded to two decimals
    pub fn classify(rounded_yield: f64) -> Self {
        if rounded_yield < 2.0 {
            YieldLevel::Low
        } else if rounded_yield < 4.0 {
            YieldLevel::Medium
        } else {
            YieldLevel::High
        }
    }

    /// CSS color used for the prediction text
    pub fn color(self) -> &'static str {
        match self {
            YieldLevel::Low => "var(--destructive)",
            YieldLevel::Medium => "var(--sun)",
            YieldLevel::High => "var(--leaf)",
        }
    }
}

/// A yield formatted for display along with its band
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedYield {
    pub text: String,
    pub level: YieldLevel,
}

impl FormattedYield {
    /// Format to two decimals; the band is taken from the rounded value.
    ///
    /// Ties round away from zero on the exact binary value, as the page's
    /// `toFixed(2)` does: 1.125 gives "1.13" while 1.005 (stored as
    /// 1.00499...) gives "1.00".
    pub fn new(predicted_yield: f64) -> Self {
        let text = match Decimal::from_f64_retain(predicted_yield) {
            Some(exact) => format!(
                "{:.2}",
                exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            ),
            // Outside the Decimal range
            None => format!("{:.2}", predicted_yield),
        };
        let rounded = text.parse::<f64>().unwrap_or(predicted_yield);
        Self {
            text,
            level: YieldLevel::classify(rounded),
        }
    }
}

/// Options offered by the page's select inputs
pub const REGIONS: &[&str] = &["North", "South", "East", "West"];
pub const SOIL_TYPES: &[&str] = &["Sandy", "Clay", "Loam", "Silt", "Peaty", "Chalky"];
pub const CROPS: &[&str] = &["Wheat", "Rice", "Maize", "Barley", "Soybean", "Cotton"];
pub const WEATHER_CONDITIONS: &[&str] = &["Sunny", "Rainy", "Cloudy"];
