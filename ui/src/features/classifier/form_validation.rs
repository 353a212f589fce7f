use thiserror::Error;

use super::types::MeasurementField;

/// Inline, field-local validation failures. These never reach the error panel.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("This field is required")]
    Required,

    #[error("Value must be between {min} and {max} cm")]
    OutOfRange { min: f64, max: f64 },
}

/// Validates a raw input value for a measurement field and returns the parsed number
pub fn validate_field(field: MeasurementField, raw: &str) -> Result<f64, FieldError> {
    let value = parse_measurement(raw).ok_or(FieldError::Required)?;

    let range = field.range();
    if !range.contains(value) {
        return Err(FieldError::OutOfRange {
            min: range.min,
            max: range.max,
        });
    }

    Ok(value)
}

/// Parses a measurement; empty, non-numeric and non-finite input yields `None`
pub fn parse_measurement(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Formats a sample value the way it is written into an input
pub fn format_measurement(value: f64) -> String {
    format!("{}", value)
}
