//! Form controller for the yield prediction page
//!
//! Submission runs through `Idle -> Validating -> Submitting -> Rendering ->
//! Idle`. The phase is held in a `Cell`, so a submit event that arrives while
//! a request is in flight is dropped instead of issuing a second request.

use std::cell::Cell;

use shared::{FormError, FormattedYield, NumericField, PredictionResult};

use crate::client::{PredictionClient, TransportError};
use crate::view::{
    alert_text, FormView, FAILURE_COLOR, FAILURE_TEXT, UNAVAILABLE_COLOR, UNAVAILABLE_TEXT,
};
use crate::{console_error, console_log};

/// Message surfaced when the server reply carries neither a yield nor an error
pub const PREDICTION_UNAVAILABLE_MESSAGE: &str = "Données de prédiction non disponibles";

/// Submission lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Validating,
    Submitting,
    Rendering,
}

/// What a submit event ended with
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A previous submission was still running
    Ignored,
    /// Blocked locally, nothing was sent
    Invalid(FormError),
    Predicted(FormattedYield),
    /// The server answered without a usable prediction
    Unavailable(String),
    /// Network failure or non-2xx status
    Failed(TransportError),
}

/// Drives one prediction form
pub struct FormController<V, C> {
    view: V,
    client: C,
    phase: Cell<Phase>,
}

impl<V: FormView, C: PredictionClient> FormController<V, C> {
    pub fn new(view: V, client: C) -> Self {
        Self {
            view,
            client,
            phase: Cell::new(Phase::Idle),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase.get()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Handle a submit event
    pub async fn submit(&self) -> Outcome {
        if self.phase.get() != Phase::Idle {
            return Outcome::Ignored;
        }

        self.phase.set(Phase::Validating);
        let request = match self.view.read_input().to_request() {
            Ok(request) => request,
            Err(err) => {
                self.view.alert(&alert_text(&err.to_string()));
                if let Some(field) = err.field() {
                    self.view.focus(field);
                }
                self.phase.set(Phase::Idle);
                return Outcome::Invalid(err);
            }
        };

        if let Ok(body) = serde_json::to_string(&request) {
            console_log(&format!("Données envoyées: {}", body));
        }

        self.phase.set(Phase::Submitting);
        self.view.set_loading(true);
        self.view.hide_result();

        let reply = self.client.predict(&request).await;

        self.phase.set(Phase::Rendering);
        let outcome = self.render(reply);

        self.view.set_loading(false);
        self.view.reveal_result();
        self.phase.set(Phase::Idle);

        outcome
    }

    fn render(&self, reply: Result<PredictionResult, TransportError>) -> Outcome {
        match reply {
            Ok(PredictionResult {
                predicted_yield: Some(predicted_yield),
                ..
            }) => {
                console_log(&format!("Réponse de l'API: {}", predicted_yield));
                let formatted = FormattedYield::new(predicted_yield);
                self.view
                    .show_prediction(&formatted.text, formatted.level.color());
                Outcome::Predicted(formatted)
            }
            Ok(PredictionResult { error, .. }) => {
                let message = error.unwrap_or_else(|| PREDICTION_UNAVAILABLE_MESSAGE.to_string());
                self.view.show_prediction(UNAVAILABLE_TEXT, UNAVAILABLE_COLOR);
                self.view.alert(&alert_text(&message));
                Outcome::Unavailable(message)
            }
            Err(err) => {
                console_error(&format!("Erreur API: {}", err));
                self.view.show_prediction(FAILURE_TEXT, FAILURE_COLOR);
                self.view
                    .alert(&alert_text(&format!("Erreur de connexion: {}", err)));
                Outcome::Failed(err)
            }
        }
    }

    /// Re-validate a numeric input when it loses focus.
    ///
    /// Empty inputs are left alone; they are only checked on submit.
    pub fn on_blur(&self, field: NumericField) {
        let value = self.view.numeric_value(field);
        if value.is_empty() {
            return;
        }
        self.view.mark_field(field, field.validate(&value).is_err());
    }

    /// Handle the reset button
    pub fn reset(&self) {
        self.view.reset_form();
        self.view.hide_result();
        self.view.clear_animation();
        self.view.show_prediction("", "");
        self.view.clear_field_styles();
    }
}
