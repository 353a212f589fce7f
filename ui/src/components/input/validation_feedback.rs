use dioxus::prelude::*;

use crate::features::classifier::{FieldError, MeasurementField};
use crate::utils::error_message_style;

#[derive(Props, PartialEq, Clone)]
pub struct FieldErrorFeedbackProps {
    pub field: MeasurementField,
    pub error: Option<FieldError>,
}

#[component]
pub fn FieldErrorFeedback(props: FieldErrorFeedbackProps) -> Element {
    let message = props
        .error
        .as_ref()
        .map(|error| error.to_string())
        .unwrap_or_default();

    rsx! {
        div {
            id: "{props.field.name()}_error",
            class: "error-message",
            style: "{error_message_style(props.error.as_ref())}",
            "{message}"
        }
    }
}
