use tracing::{debug, info, warn};

use super::form_validation::{format_measurement, validate_field, FieldError};
use super::rendering::{render, ResultView};
use super::types::*;
use crate::services::client::{PredictionDispatcher, PredictionTransport};
use crate::services::errors::{ClassifierError, GENERIC_FAILURE_MESSAGE};
use crate::utils::platform::now_ms;

/// Field that receives focus on load, after a reset and after dismissing an error
pub const FIRST_FIELD: MeasurementField = MeasurementField::SepalLength;

/// Headless owner of the form: raw input values, inline errors and the UI state.
///
/// The presentation layer forwards events to the explicit methods here and
/// renders purely from the resulting state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormController {
    values: [String; 4],
    errors: [Option<FieldError>; 4],
    ui_state: UiState,
    pending_focus: Option<MeasurementField>,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: MeasurementField) -> &str {
        &self.values[field.index()]
    }

    pub fn error(&self, field: MeasurementField) -> Option<&FieldError> {
        self.errors[field.index()].as_ref()
    }

    pub fn has_field_errors(&self) -> bool {
        self.errors.iter().any(Option::is_some)
    }

    pub fn ui_state(&self) -> &UiState {
        &self.ui_state
    }

    pub fn is_submitting(&self) -> bool {
        self.ui_state.is_submitting()
    }

    /// Field the view should focus next, if any; consumed on read
    pub fn take_focus_request(&mut self) -> Option<MeasurementField> {
        self.pending_focus.take()
    }

    /// Keystroke handler. An empty field never shows an error.
    pub fn on_change(&mut self, field: MeasurementField, raw: impl Into<String>) {
        let raw = raw.into();
        let error = if raw.trim().is_empty() {
            None
        } else {
            validate_field(field, &raw).err()
        };
        self.values[field.index()] = raw;
        self.errors[field.index()] = error;
    }

    /// Focus-loss handler; re-validates non-empty values
    pub fn on_blur(&mut self, field: MeasurementField) {
        let raw = &self.values[field.index()];
        if raw.trim().is_empty() {
            return;
        }
        self.errors[field.index()] = validate_field(field, raw).err();
    }

    /// Validate all four fields, recording every failure. True iff all pass.
    pub fn validate_form(&mut self) -> bool {
        self.validated_values().is_some()
    }

    /// Parsed values of all four fields, or `None` after recording each failure
    fn validated_values(&mut self) -> Option<[f64; 4]> {
        let mut values = [0.0; 4];
        let mut is_valid = true;
        for field in MeasurementField::ALL {
            match validate_field(field, &self.values[field.index()]) {
                Ok(value) => {
                    values[field.index()] = value;
                    self.errors[field.index()] = None;
                }
                Err(error) => {
                    self.errors[field.index()] = Some(error);
                    is_valid = false;
                }
            }
        }
        is_valid.then_some(values)
    }

    pub fn clear_errors(&mut self) {
        self.errors = Default::default();
    }

    /// Autofill the canonical measurements for `species_key`; unknown keys are ignored.
    /// Returns whether a sample was loaded.
    pub fn load_sample(&mut self, species_key: &str) -> bool {
        let Some(species) = Species::from_name(species_key) else {
            debug!("No sample data for '{}'", species_key);
            return false;
        };

        let sample = species.sample();
        for field in MeasurementField::ALL {
            self.on_change(field, format_measurement(sample.value(field)));
        }
        self.clear_errors();
        true
    }

    /// Reset to an empty form with both panels hidden.
    ///
    /// A request in flight is not cancelled: the form stays `Submitting` until
    /// its outcome arrives.
    pub fn clear(&mut self) {
        self.values = Default::default();
        self.clear_errors();
        if !self.is_submitting() {
            self.ui_state = UiState::Idle;
        }
        self.pending_focus = Some(FIRST_FIELD);
    }

    /// Hide the error panel so the user can try again
    pub fn dismiss_error(&mut self) {
        if matches!(self.ui_state, UiState::ShowingError { .. }) {
            self.ui_state = UiState::Idle;
        }
        self.pending_focus = Some(FIRST_FIELD);
    }

    /// First half of a submission: validate and enter `Submitting`.
    ///
    /// Returns `None` while another request is in flight or when any field is
    /// invalid; in the latter case only inline errors are shown and the UI
    /// state is left as it was.
    pub fn begin_submission(&mut self) -> Option<PredictionRequest> {
        if self.is_submitting() {
            debug!("Submission ignored, a prediction is already in flight");
            return None;
        }

        self.clear_errors();
        let Some(values) = self.validated_values() else {
            debug!("Submission blocked by invalid fields");
            return None;
        };

        match PredictionRequest::from_values(values) {
            Ok(request) => {
                self.ui_state = UiState::Submitting;
                Some(request)
            }
            Err((field, error)) => {
                self.errors[field.index()] = Some(error);
                None
            }
        }
    }

    /// Second half of a submission: always leaves `Submitting`
    pub fn finish_submission(
        &mut self,
        outcome: Result<PredictionResponse, ClassifierError>,
        elapsed_ms: Option<u64>,
    ) {
        let rendered = outcome.and_then(|response| render(&response, elapsed_ms));
        match rendered {
            Ok(view) => self.render_result(view),
            Err(error) => {
                warn!(retryable = error.is_retryable(), "Prediction error: {}", error);
                self.show_error(error.user_message(), error.is_retryable());
            }
        }
    }

    pub fn render_result(&mut self, view: ResultView) {
        info!(
            "Showing prediction {} ({:?}%)",
            view.display_name, view.confidence_percentage
        );
        self.ui_state = UiState::ShowingResult(view);
    }

    /// Show a failure message; an empty message falls back to the generic one
    pub fn render_error(&mut self, message: impl Into<String>) {
        self.show_error(message.into(), true);
    }

    fn show_error(&mut self, message: String, retryable: bool) {
        let message = if message.trim().is_empty() {
            GENERIC_FAILURE_MESSAGE.to_string()
        } else {
            message
        };
        self.ui_state = UiState::ShowingError { message, retryable };
    }

    /// End-to-end submission against `dispatcher`
    pub async fn submit<T: PredictionTransport>(&mut self, dispatcher: &PredictionDispatcher<T>) {
        let Some(request) = self.begin_submission() else {
            return;
        };

        let started = now_ms();
        let outcome = dispatcher.submit(&request).await;
        let elapsed = elapsed_since(started);
        self.finish_submission(outcome, Some(elapsed));
    }

    /// Reduces the synchronous form actions in place
    pub fn reduce_in_place(&mut self, action: FormAction) {
        match action {
            FormAction::FieldInput(field, raw) => self.on_change(field, raw),
            FormAction::FieldBlur(field) => self.on_blur(field),
            FormAction::LoadSample(species) => {
                self.load_sample(&species);
            }
            FormAction::Clear => self.clear(),
            FormAction::DismissError => self.dismiss_error(),
        }
    }
}

/// Whole milliseconds elapsed since `started` (a `now_ms` reading)
pub fn elapsed_since(started: f64) -> u64 {
    (now_ms() - started).max(0.0).round() as u64
}
