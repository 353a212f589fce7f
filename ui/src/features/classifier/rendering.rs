use super::types::{PredictionResponse, Species};
use crate::services::errors::{ClassifierError, ClassifierResult};

/// One bar in the probability breakdown
#[derive(Clone, Debug, PartialEq)]
pub struct ProbabilityBar {
    pub species: Species,
    pub percentage: u32,
}

/// Everything the result panel displays, derived from a backend response
#[derive(Clone, Debug, PartialEq)]
pub struct ResultView {
    pub species: Species,
    pub emoji: &'static str,
    pub display_name: &'static str,
    pub latin_name: &'static str,
    pub accent_color: &'static str,
    pub confidence_percentage: Option<u32>,
    pub probabilities: Option<Vec<ProbabilityBar>>,
    pub elapsed_ms: Option<u64>,
}

impl ResultView {
    pub fn confidence_label(&self) -> Option<String> {
        self.confidence_percentage.map(|pct| format!("{}%", pct))
    }

    /// Inline style for the confidence progress bar
    pub fn confidence_style(&self) -> Option<String> {
        self.confidence_percentage
            .map(|pct| format!("width: {}%; background-color: {};", pct, self.accent_color))
    }
}

/// Rounds a probability to a whole percentage.
///
/// Out-of-range values are clamped into [0, 1]; non-finite values are treated as absent.
pub fn to_percentage(probability: f64) -> Option<u32> {
    if !probability.is_finite() {
        return None;
    }
    Some((probability.clamp(0.0, 1.0) * 100.0).round() as u32)
}

/// Build the result view for a response, failing on an unrecognised species
pub fn render(response: &PredictionResponse, elapsed_ms: Option<u64>) -> ClassifierResult<ResultView> {
    let species = Species::from_name(&response.prediction).ok_or_else(|| {
        ClassifierError::UnknownSpecies {
            species: response.prediction.clone(),
        }
    })?;
    let info = species.info();

    let probabilities = response.probabilities.as_ref().map(|map| {
        Species::ALL
            .iter()
            .map(|species| ProbabilityBar {
                species: *species,
                percentage: map
                    .get(species.key())
                    .copied()
                    .and_then(to_percentage)
                    .unwrap_or(0),
            })
            .collect()
    });

    Ok(ResultView {
        species,
        emoji: info.emoji,
        display_name: species.display_name(),
        latin_name: info.latin,
        accent_color: info.color,
        confidence_percentage: response.confidence.and_then(to_percentage),
        probabilities,
        elapsed_ms,
    })
}
