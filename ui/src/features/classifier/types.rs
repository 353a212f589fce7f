// Core types for the iris classifier - no dioxus imports needed here
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::form_validation::FieldError;
use super::rendering::ResultView;

/// Inclusive valid range for a measurement, in centimeters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
}

impl FieldRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// The four flower dimensions collected by the form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MeasurementField {
    SepalLength,
    SepalWidth,
    PetalLength,
    PetalWidth,
}

impl MeasurementField {
    /// Form order; the first entry receives focus on load and after a reset
    pub const ALL: [MeasurementField; 4] = [
        MeasurementField::SepalLength,
        MeasurementField::SepalWidth,
        MeasurementField::PetalLength,
        MeasurementField::PetalWidth,
    ];

    /// Wire name, also used as the input element id
    pub fn name(&self) -> &'static str {
        match self {
            MeasurementField::SepalLength => "sepal_length",
            MeasurementField::SepalWidth => "sepal_width",
            MeasurementField::PetalLength => "petal_length",
            MeasurementField::PetalWidth => "petal_width",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MeasurementField::SepalLength => "Sepal Length",
            MeasurementField::SepalWidth => "Sepal Width",
            MeasurementField::PetalLength => "Petal Length",
            MeasurementField::PetalWidth => "Petal Width",
        }
    }

    pub fn range(&self) -> FieldRange {
        match self {
            MeasurementField::SepalLength => FieldRange::new(4.0, 8.0),
            MeasurementField::SepalWidth => FieldRange::new(2.0, 4.5),
            MeasurementField::PetalLength => FieldRange::new(1.0, 7.0),
            MeasurementField::PetalWidth => FieldRange::new(0.1, 2.5),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            MeasurementField::SepalLength => 0,
            MeasurementField::SepalWidth => 1,
            MeasurementField::PetalLength => 2,
            MeasurementField::PetalWidth => 3,
        }
    }
}

/// Display metadata for a species
#[derive(Debug, PartialEq)]
pub struct SpeciesInfo {
    pub emoji: &'static str,
    pub latin: &'static str,
    pub color: &'static str,
}

/// Canonical measurements used to autofill the form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleData {
    pub sepal_length: f64,
    pub sepal_width: f64,
    pub petal_length: f64,
    pub petal_width: f64,
}

impl SampleData {
    pub fn value(&self, field: MeasurementField) -> f64 {
        match field {
            MeasurementField::SepalLength => self.sepal_length,
            MeasurementField::SepalWidth => self.sepal_width,
            MeasurementField::PetalLength => self.petal_length,
            MeasurementField::PetalWidth => self.petal_width,
        }
    }
}

static SETOSA_INFO: SpeciesInfo = SpeciesInfo {
    emoji: "🌺",
    latin: "Iris setosa",
    color: "#ff6b6b",
};
static VERSICOLOR_INFO: SpeciesInfo = SpeciesInfo {
    emoji: "🌻",
    latin: "Iris versicolor",
    color: "#4ecdc4",
};
static VIRGINICA_INFO: SpeciesInfo = SpeciesInfo {
    emoji: "🌷",
    latin: "Iris virginica",
    color: "#45b7d1",
};

static SETOSA_SAMPLE: SampleData = SampleData {
    sepal_length: 5.1,
    sepal_width: 3.5,
    petal_length: 1.4,
    petal_width: 0.2,
};
static VERSICOLOR_SAMPLE: SampleData = SampleData {
    sepal_length: 6.2,
    sepal_width: 2.9,
    petal_length: 4.3,
    petal_width: 1.3,
};
static VIRGINICA_SAMPLE: SampleData = SampleData {
    sepal_length: 6.5,
    sepal_width: 3.0,
    petal_length: 5.2,
    petal_width: 2.0,
};

/// The three classes the backend can predict
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Species {
    Setosa,
    Versicolor,
    Virginica,
}

impl Species {
    /// Fixed display order for probability bars and sample buttons
    pub const ALL: [Species; 3] = [Species::Setosa, Species::Versicolor, Species::Virginica];

    pub fn key(&self) -> &'static str {
        match self {
            Species::Setosa => "setosa",
            Species::Versicolor => "versicolor",
            Species::Virginica => "virginica",
        }
    }

    /// Capitalized common name
    pub fn display_name(&self) -> &'static str {
        match self {
            Species::Setosa => "Setosa",
            Species::Versicolor => "Versicolor",
            Species::Virginica => "Virginica",
        }
    }

    /// Case-insensitive lookup by species key
    pub fn from_name(name: &str) -> Option<Self> {
        let lowered = name.to_lowercase();
        Self::ALL.into_iter().find(|species| species.key() == lowered)
    }

    pub fn info(&self) -> &'static SpeciesInfo {
        match self {
            Species::Setosa => &SETOSA_INFO,
            Species::Versicolor => &VERSICOLOR_INFO,
            Species::Virginica => &VIRGINICA_INFO,
        }
    }

    pub fn sample(&self) -> &'static SampleData {
        match self {
            Species::Setosa => &SETOSA_SAMPLE,
            Species::Versicolor => &VERSICOLOR_SAMPLE,
            Species::Virginica => &VIRGINICA_SAMPLE,
        }
    }
}

/// Validated payload for a single submission.
///
/// Fields are private so a request can only exist with all four values in range.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PredictionRequest {
    sepal_length: f64,
    sepal_width: f64,
    petal_length: f64,
    petal_width: f64,
}

impl PredictionRequest {
    /// Build a request from values in `MeasurementField::ALL` order
    pub fn from_values(values: [f64; 4]) -> Result<Self, (MeasurementField, FieldError)> {
        for field in MeasurementField::ALL {
            let value = values[field.index()];
            let range = field.range();
            if !value.is_finite() {
                return Err((field, FieldError::Required));
            }
            if !range.contains(value) {
                return Err((
                    field,
                    FieldError::OutOfRange {
                        min: range.min,
                        max: range.max,
                    },
                ));
            }
        }

        Ok(Self {
            sepal_length: values[0],
            sepal_width: values[1],
            petal_length: values[2],
            petal_width: values[3],
        })
    }

    pub fn value(&self, field: MeasurementField) -> f64 {
        match field {
            MeasurementField::SepalLength => self.sepal_length,
            MeasurementField::SepalWidth => self.sepal_width,
            MeasurementField::PetalLength => self.petal_length,
            MeasurementField::PetalWidth => self.petal_width,
        }
    }
}

/// Body returned by the prediction backend
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PredictionResponse {
    pub prediction: String,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub probabilities: Option<HashMap<String, f64>>,
}

// UI state machine
#[derive(Clone, Debug, PartialEq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Submitting,
    ShowingResult(ResultView),
    /// `retryable` is false when sending the same measurements again cannot help
    ShowingError { message: String, retryable: bool },
}

/// Payload-free view of `UiState`, cheap to compare in effects
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiPhase {
    Idle,
    Submitting,
    ShowingResult,
    ShowingError,
}

impl UiState {
    pub fn phase(&self) -> UiPhase {
        match self {
            UiState::Idle => UiPhase::Idle,
            UiState::Submitting => UiPhase::Submitting,
            UiState::ShowingResult(_) => UiPhase::ShowingResult,
            UiState::ShowingError { .. } => UiPhase::ShowingError,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, UiState::Submitting)
    }

    pub fn result(&self) -> Option<&ResultView> {
        match self {
            UiState::ShowingResult(view) => Some(view),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            UiState::ShowingError { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn error_is_retryable(&self) -> bool {
        matches!(self, UiState::ShowingError { retryable: true, .. })
    }
}

// Action enum for synchronous form mutations
#[derive(Clone, Debug, PartialEq)]
pub enum FormAction {
    FieldInput(MeasurementField, String),
    FieldBlur(MeasurementField),
    LoadSample(String),
    Clear,
    DismissError,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_species_lookup_is_case_insensitive() {
        assert_eq!(Species::from_name("setosa"), Some(Species::Setosa));
        assert_eq!(Species::from_name("VersiColor"), Some(Species::Versicolor));
        assert_eq!(Species::from_name("VIRGINICA"), Some(Species::Virginica));
        assert_eq!(Species::from_name("rose"), None);
        assert_eq!(Species::from_name(""), None);
    }

    #[test]
    fn test_species_tables() {
        assert_eq!(Species::Setosa.info().latin, "Iris setosa");
        assert_eq!(Species::Versicolor.info().color, "#4ecdc4");
        assert_eq!(Species::Virginica.info().emoji, "🌷");

        let sample = Species::Setosa.sample();
        assert_eq!(sample.value(MeasurementField::SepalLength), 5.1);
        assert_eq!(sample.value(MeasurementField::PetalWidth), 0.2);
    }

    #[test]
    fn test_every_sample_fits_its_ranges() {
        for species in Species::ALL {
            let sample = species.sample();
            for field in MeasurementField::ALL {
                assert!(
                    field.range().contains(sample.value(field)),
                    "{:?} sample out of range for {}",
                    species,
                    field.name()
                );
            }
        }
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in MeasurementField::ALL {
            assert_eq!(MeasurementField::from_name(field.name()), Some(field));
        }
        assert_eq!(MeasurementField::from_name("stem_length"), None);
    }

    #[test]
    fn test_request_serializes_exactly_four_numbers() {
        let request = PredictionRequest::from_values([5.1, 3.5, 1.4, 0.2]).unwrap();
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "sepal_length": 5.1,
                "sepal_width": 3.5,
                "petal_length": 1.4,
                "petal_width": 0.2
            })
        );
    }

    #[test]
    fn test_request_rejects_out_of_range_values() {
        let err = PredictionRequest::from_values([5.1, 9.0, 1.4, 0.2]).unwrap_err();
        assert_eq!(
            err,
            (
                MeasurementField::SepalWidth,
                FieldError::OutOfRange { min: 2.0, max: 4.5 }
            )
        );

        let err = PredictionRequest::from_values([f64::NAN, 3.5, 1.4, 0.2]).unwrap_err();
        assert_eq!(err, (MeasurementField::SepalLength, FieldError::Required));
    }

    #[test]
    fn test_response_optional_fields() {
        let response: PredictionResponse =
            serde_json::from_value(json!({ "prediction": "setosa" })).unwrap();
        assert_eq!(response.prediction, "setosa");
        assert!(response.confidence.is_none());
        assert!(response.probabilities.is_none());

        let response: PredictionResponse = serde_json::from_value(json!({
            "prediction": "virginica",
            "confidence": null,
            "probabilities": { "virginica": 0.9 }
        }))
        .unwrap();
        assert!(response.confidence.is_none());
        assert_eq!(response.probabilities.unwrap()["virginica"], 0.9);
    }

    #[test]
    fn test_ui_state_phase() {
        assert_eq!(UiState::default().phase(), UiPhase::Idle);
        assert!(UiState::Submitting.is_submitting());
        let error = UiState::ShowingError {
            message: "boom".to_string(),
            retryable: false,
        };
        assert_eq!(error.phase(), UiPhase::ShowingError);
        assert_eq!(error.error_message(), Some("boom"));
        assert!(!error.error_is_retryable());
        assert!(error.result().is_none());
    }
}
