use dioxus::prelude::*;

use crate::features::classifier::{FieldError, MeasurementField};
use crate::utils::{field_validation_class, field_validation_style};

use super::FieldErrorFeedback;

#[derive(Props, PartialEq, Clone)]
pub struct MeasurementInputProps {
    pub field: MeasurementField,
    pub value: String,
    pub error: Option<FieldError>,
    pub disabled: bool,
    pub on_change: EventHandler<String>,
    pub on_blur: EventHandler<()>,
}

/// Number input for one measurement, with its label and inline error
#[component]
pub fn MeasurementInput(props: MeasurementInputProps) -> Element {
    let field = props.field;
    let range = field.range();
    let error = props.error.clone();

    rsx! {
        div {
            class: "input-section",
            label {
                class: "input-label",
                r#for: "{field.name()}",
                "{field.label()} (cm)"
            }
            input {
                id: "{field.name()}",
                name: "{field.name()}",
                class: "{field_validation_class(error.as_ref())}",
                style: "{field_validation_style(error.as_ref())}",
                r#type: "number",
                step: "0.1",
                min: "{range.min}",
                max: "{range.max}",
                placeholder: "{range.min} - {range.max}",
                value: "{props.value}",
                disabled: props.disabled,
                oninput: move |event| props.on_change.call(event.value()),
                onblur: move |_| props.on_blur.call(())
            }
            FieldErrorFeedback { field: field, error: error.clone() }
        }
    }
}
