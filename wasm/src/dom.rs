//! Browser implementation of [`FormView`]
//!
//! Every element the controller needs is looked up once when the view is
//! built; a missing or mistyped element fails the mount instead of failing
//! later inside an event handler.

use shared::{FormInput, NumericField};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlSelectElement,
};

use crate::console_error;
use crate::view::{
    ids, FormView, ENTRANCE_ANIMATION_CLASS, FORM_CONTROL_CLASS, HIDDEN_CLASS,
    INVALID_BORDER_COLOR, INVALID_BOX_SHADOW,
};

/// Placeholder and native constraint attributes of a numeric input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputHint {
    pub placeholder: &'static str,
    pub min: &'static str,
    pub max: &'static str,
    pub step: &'static str,
}

/// Hints applied to each numeric input on mount
pub fn input_hint(field: NumericField) -> InputHint {
    match field {
        NumericField::Rainfall => InputHint {
            placeholder: "Ex: 750.5",
            min: "0.1",
            max: "10000",
            step: "0.1",
        },
        NumericField::Temperature => InputHint {
            placeholder: "Ex: 25.3",
            min: "-49.9",
            max: "59.9",
            step: "0.1",
        },
        NumericField::GrowingDays => InputHint {
            placeholder: "Ex: 120",
            min: "1",
            max: "365",
            step: "1",
        },
    }
}

/// The prediction page, bound to its elements
pub struct DomView {
    document: Document,
    form: HtmlFormElement,
    reset_button: HtmlButtonElement,
    submit_button: HtmlButtonElement,
    result_panel: HtmlElement,
    final_prediction: HtmlElement,
    submit_text: HtmlElement,
    loading_text: HtmlElement,
    region: HtmlSelectElement,
    soil_type: HtmlSelectElement,
    crop: HtmlSelectElement,
    weather_condition: HtmlSelectElement,
    rainfall: HtmlInputElement,
    temperature: HtmlInputElement,
    growing_days: HtmlInputElement,
    fertilizer_used: HtmlInputElement,
    irrigation_used: HtmlInputElement,
}

fn element<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Element #{} not found", id)))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Element #{} has an unexpected type", id)))
}

/// Log a failed DOM call; the page stays usable.
fn report<T>(result: Result<T, JsValue>) {
    if let Err(err) = result {
        console_error(&format!("DOM update failed: {:?}", err));
    }
}

fn clear_validation_style(element: &HtmlElement) {
    let style = element.style();
    report(style.remove_property("border-color"));
    report(style.remove_property("box-shadow"));
}

impl DomView {
    pub fn from_document(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            document: document.clone(),
            form: element(document, ids::FORM)?,
            reset_button: element(document, ids::RESET_BUTTON)?,
            submit_button: element(document, ids::SUBMIT_BUTTON)?,
            result_panel: element(document, ids::RESULT_PANEL)?,
            final_prediction: element(document, ids::FINAL_PREDICTION)?,
            submit_text: element(document, ids::SUBMIT_TEXT)?,
            loading_text: element(document, ids::LOADING_TEXT)?,
            region: element(document, ids::REGION)?,
            soil_type: element(document, ids::SOIL_TYPE)?,
            crop: element(document, ids::CROP)?,
            weather_condition: element(document, ids::WEATHER_CONDITION)?,
            rainfall: element(document, ids::RAINFALL)?,
            temperature: element(document, ids::TEMPERATURE)?,
            growing_days: element(document, ids::GROWING_DAYS)?,
            fertilizer_used: element(document, ids::FERTILIZER_USED)?,
            irrigation_used: element(document, ids::IRRIGATION_USED)?,
        })
    }

    pub fn form(&self) -> &HtmlFormElement {
        &self.form
    }

    pub fn reset_button(&self) -> &HtmlButtonElement {
        &self.reset_button
    }

    pub fn input(&self, field: NumericField) -> &HtmlInputElement {
        match field {
            NumericField::Rainfall => &self.rainfall,
            NumericField::Temperature => &self.temperature,
            NumericField::GrowingDays => &self.growing_days,
        }
    }

    /// Set placeholders and native min/max/step on the numeric inputs
    pub fn apply_input_hints(&self) {
        for field in NumericField::ALL {
            let hint = input_hint(field);
            let input = self.input(field);
            input.set_placeholder(hint.placeholder);
            input.set_min(hint.min);
            input.set_max(hint.max);
            input.set_step(hint.step);
        }
    }
}

impl FormView for DomView {
    fn read_input(&self) -> FormInput {
        FormInput {
            region: self.region.value(),
            soil_type: self.soil_type.value(),
            crop: self.crop.value(),
            rainfall: self.rainfall.value(),
            temperature: self.temperature.value(),
            weather_condition: self.weather_condition.value(),
            growing_days: self.growing_days.value(),
            fertilizer_used: self.fertilizer_used.checked(),
            irrigation_used: self.irrigation_used.checked(),
        }
    }

    fn numeric_value(&self, field: NumericField) -> String {
        self.input(field).value()
    }

    fn alert(&self, message: &str) {
        match web_sys::window() {
            Some(window) => report(window.alert_with_message(message)),
            None => console_error(message),
        }
    }

    fn focus(&self, field: NumericField) {
        report(self.input(field).focus());
    }

    fn set_loading(&self, loading: bool) {
        self.submit_button.set_disabled(loading);
        if loading {
            report(self.submit_text.class_list().add_1(HIDDEN_CLASS));
            report(self.loading_text.class_list().remove_1(HIDDEN_CLASS));
        } else {
            report(self.submit_text.class_list().remove_1(HIDDEN_CLASS));
            report(self.loading_text.class_list().add_1(HIDDEN_CLASS));
        }
    }

    fn hide_result(&self) {
        report(self.result_panel.class_list().add_1(HIDDEN_CLASS));
    }

    fn reveal_result(&self) {
        let classes = self.result_panel.class_list();
        report(classes.remove_1(HIDDEN_CLASS));
        report(classes.add_1(ENTRANCE_ANIMATION_CLASS));
    }

    fn clear_animation(&self) {
        report(
            self.result_panel
                .class_list()
                .remove_1(ENTRANCE_ANIMATION_CLASS),
        );
    }

    fn show_prediction(&self, text: &str, color: &str) {
        self.final_prediction.set_text_content(Some(text));
        let style = self.final_prediction.style();
        if color.is_empty() {
            report(style.remove_property("color"));
        } else {
            report(style.set_property("color", color));
        }
    }

    fn mark_field(&self, field: NumericField, invalid: bool) {
        let input: &HtmlElement = self.input(field);
        if invalid {
            let style = input.style();
            report(style.set_property("border-color", INVALID_BORDER_COLOR));
            report(style.set_property("box-shadow", INVALID_BOX_SHADOW));
        } else {
            clear_validation_style(input);
        }
    }

    fn clear_field_styles(&self) {
        let selector = format!(".{}", FORM_CONTROL_CLASS);
        let nodes = match self.document.query_selector_all(&selector) {
            Ok(nodes) => nodes,
            Err(err) => {
                console_error(&format!("Cannot query {}: {:?}", selector, err));
                return;
            }
        };
        for index in 0..nodes.length() {
            if let Some(element) = nodes
                .item(index)
                .and_then(|node| node.dyn_into::<HtmlElement>().ok())
            {
                clear_validation_style(&element);
            }
        }
    }

    fn reset_form(&self) {
        self.form.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hints_match_validation_bounds() {
        for field in NumericField::ALL {
            let hint = input_hint(field);
            let min: f64 = hint.min.parse().unwrap();
            let max: f64 = hint.max.parse().unwrap();
            assert!(min >= field.min());
            assert!(max <= field.max().unwrap());
        }
    }

    #[test]
    fn test_placeholders_are_valid_values() {
        for field in NumericField::ALL {
            let example = input_hint(field).placeholder.trim_start_matches("Ex: ");
            assert!(field.validate(example).is_ok(), "{:?}", field);
        }
    }
}
