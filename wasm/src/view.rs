//! Page surface the form controller drives
//!
//! The controller never touches the DOM directly. Everything it needs from
//! the page goes through [`FormView`], implemented by [`crate::dom::DomView`]
//! in the browser and by recording doubles in tests.

use shared::{FormInput, NumericField};

/// Element IDs of the prediction page
pub mod ids {
    pub const FORM: &str = "prediction-form";
    pub const RESET_BUTTON: &str = "reset-button";
    pub const SUBMIT_BUTTON: &str = "submit-button";
    pub const RESULT_PANEL: &str = "prediction-result";
    pub const FINAL_PREDICTION: &str = "final-prediction";
    pub const SUBMIT_TEXT: &str = "submit-text";
    pub const LOADING_TEXT: &str = "loading-text";
    pub const REGION: &str = "region";
    pub const SOIL_TYPE: &str = "soilType";
    pub const CROP: &str = "cropType";
    pub const RAINFALL: &str = "rainfall";
    pub const TEMPERATURE: &str = "temperature";
    pub const WEATHER_CONDITION: &str = "weatherCondition";
    pub const GROWING_DAYS: &str = "growingDays";
    pub const FERTILIZER_USED: &str = "fertilizerUsed";
    pub const IRRIGATION_USED: &str = "irrigationUsed";
}

/// Class carried by every input whose validation styling reset clears
pub const FORM_CONTROL_CLASS: &str = "form-control";
pub const HIDDEN_CLASS: &str = "hidden";
pub const ENTRANCE_ANIMATION_CLASS: &str = "animate-slide-up";

pub const INVALID_BORDER_COLOR: &str = "var(--destructive)";
pub const INVALID_BOX_SHADOW: &str = "0 0 0 2px rgba(220, 38, 38, 0.2)";

pub const UNAVAILABLE_TEXT: &str = "N/A";
pub const UNAVAILABLE_COLOR: &str = "var(--muted-foreground)";
pub const FAILURE_TEXT: &str = "Erreur";
pub const FAILURE_COLOR: &str = "var(--destructive)";

/// Element ID of a numeric input
pub fn element_id(field: NumericField) -> &'static str {
    match field {
        NumericField::Rainfall => ids::RAINFALL,
        NumericField::Temperature => ids::TEMPERATURE,
        NumericField::GrowingDays => ids::GROWING_DAYS,
    }
}

/// Numeric field behind an element ID
pub fn field_for_id(id: &str) -> Option<NumericField> {
    NumericField::ALL
        .into_iter()
        .find(|field| element_id(*field) == id)
}

/// Text of a blocking alert
pub fn alert_text(message: &str) -> String {
    format!("❌ Erreur\n{}", message)
}

/// Operations the controller performs on the page
pub trait FormView {
    /// Snapshot of every form field
    fn read_input(&self) -> FormInput;

    /// Current text of one numeric input
    fn numeric_value(&self, field: NumericField) -> String;

    /// Show a blocking alert
    fn alert(&self, message: &str);

    /// Move focus to a numeric input
    fn focus(&self, field: NumericField);

    /// Disable the submit control and show the loading content, or undo it
    fn set_loading(&self, loading: bool);

    fn hide_result(&self);

    /// Show the result panel with its entrance animation
    fn reveal_result(&self);

    fn clear_animation(&self);

    /// Set the prediction text and its color; empty strings clear both
    fn show_prediction(&self, text: &str, color: &str);

    /// Apply or clear the error border on a numeric input
    fn mark_field(&self, field: NumericField, invalid: bool);

    /// Clear validation styling on every `form-control` element
    fn clear_field_styles(&self);

    /// Restore every field to its default value
    fn reset_form(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_ids_round_trip() {
        for field in NumericField::ALL {
            assert_eq!(field_for_id(element_id(field)), Some(field));
        }
        assert_eq!(field_for_id(ids::REGION), None);
    }

    #[test]
    fn test_alert_text() {
        assert_eq!(alert_text("boom"), "❌ Erreur\nboom");
    }
}
