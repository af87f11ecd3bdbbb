//! WebAssembly module for the crop yield prediction page
//!
//! Provides the client side of the prediction form:
//! - Field validation shared with the server
//! - Submission of one prediction request to `/predict`
//! - Color-coded rendering of the predicted yield
//! - Live feedback on the numeric inputs and form reset

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub mod client;
pub mod controller;
pub mod dom;
pub mod view;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

use client::FetchClient;
use controller::FormController;
use dom::DomView;

pub(crate) fn console_log(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

pub(crate) fn console_error(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Bind the controller to the prediction form of the current document.
///
/// Call once the page is parsed (a module script or `DOMContentLoaded`).
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("No document available"))?;

    let view = DomView::from_document(&document)?;
    view.apply_input_hints();

    let controller = Rc::new(FormController::new(view, FetchClient::default()));
    attach_submit_listener(&controller)?;
    attach_blur_listeners(&controller)?;
    attach_reset_listener(&controller)?;

    console_log("Prediction form ready");
    Ok(())
}

type PageController = FormController<DomView, FetchClient>;

fn attach_submit_listener(controller: &Rc<PageController>) -> Result<(), JsValue> {
    let ctrl = Rc::clone(controller);
    let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
        event.prevent_default();
        let ctrl = Rc::clone(&ctrl);
        wasm_bindgen_futures::spawn_local(async move {
            ctrl.submit().await;
        });
    }) as Box<dyn FnMut(_)>);

    controller
        .view()
        .form()
        .add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
    closure.forget(); // Keep closure alive
    Ok(())
}

fn attach_blur_listeners(controller: &Rc<PageController>) -> Result<(), JsValue> {
    for field in NumericField::ALL {
        let ctrl = Rc::clone(controller);
        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            ctrl.on_blur(field);
        }) as Box<dyn FnMut(_)>);

        controller
            .view()
            .input(field)
            .add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

fn attach_reset_listener(controller: &Rc<PageController>) -> Result<(), JsValue> {
    let ctrl = Rc::clone(controller);
    let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        ctrl.reset();
    }) as Box<dyn FnMut(_)>);

    controller
        .view()
        .reset_button()
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Validate one numeric input by element ID; returns the error message, if any
#[wasm_bindgen]
pub fn validate_field(element_id: &str, value: &str) -> Option<String> {
    match view::field_for_id(element_id) {
        Some(field) => field.validate(value).err().map(|e| e.to_string()),
        None => Some(format!("Unknown field: {}", element_id)),
    }
}

/// Format a predicted yield to two decimals
#[wasm_bindgen]
pub fn format_predicted_yield(predicted_yield: f64) -> String {
    FormattedYield::new(predicted_yield).text
}

/// CSS color for a predicted yield
#[wasm_bindgen]
pub fn predicted_yield_color(predicted_yield: f64) -> String {
    FormattedYield::new(predicted_yield).level.color().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_field() {
        assert_eq!(validate_field("rainfall", "750.5"), None);
        assert_eq!(
            validate_field("rainfall", "10000.1"),
            Some("Les précipitations (mm) ne doit pas dépasser 10000".to_string())
        );
        assert!(validate_field("growingDays", "1").is_some());
        assert_eq!(
            validate_field("region", "North"),
            Some("Unknown field: region".to_string())
        );
    }

    #[test]
    fn test_format_and_color() {
        assert_eq!(format_predicted_yield(1.5), "1.50");
        assert_eq!(predicted_yield_color(1.5), "var(--destructive)");
        assert_eq!(predicted_yield_color(3.0), "var(--sun)");
        assert_eq!(predicted_yield_color(5.0), "var(--leaf)");
    }
}
