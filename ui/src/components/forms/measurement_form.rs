use dioxus::prelude::*;

use crate::components::forms::SampleButtons;
use crate::components::input::MeasurementInput;
use crate::features::classifier::{FormAction, FormController, MeasurementField, Species};

#[derive(Props, PartialEq, Clone)]
pub struct MeasurementFormProps {
    pub state: Signal<FormController>,
    pub dispatch: EventHandler<FormAction>,
    pub on_submit: EventHandler<()>,
}

#[component]
pub fn MeasurementForm(props: MeasurementFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let on_submit = props.on_submit;
    let submitting = state.read().is_submitting();

    rsx! {
        form {
            id: "irisForm",
            class: "iris-form",
            onsubmit: move |event: FormEvent| {
                event.prevent_default();
                on_submit.call(());
            },

            h2 {
                class: "form-title",
                "Flower Measurements"
            }

            div {
                class: "measurement-grid",
                for field in MeasurementField::ALL {
                    MeasurementInput {
                        key: "{field.name()}",
                        field: field,
                        value: state.read().value(field).to_string(),
                        error: state.read().error(field).cloned(),
                        disabled: submitting,
                        on_change: move |raw: String| {
                            dispatch.call(FormAction::FieldInput(field, raw));
                        },
                        on_blur: move |_| {
                            dispatch.call(FormAction::FieldBlur(field));
                        }
                    }
                }
            }

            SampleButtons {
                disabled: submitting,
                on_select: move |species: Species| {
                    dispatch.call(FormAction::LoadSample(species.key().to_string()));
                }
            }

            div {
                class: "button-section",
                button {
                    id: "submitBtn",
                    class: "submit-button",
                    r#type: "submit",
                    disabled: submitting,
                    if submitting {
                        span { class: "btn-loading", "Classifying..." }
                    } else {
                        span { class: "btn-text", "🔍 Classify Flower" }
                    }
                }
                button {
                    id: "clearBtn",
                    class: "clear-button",
                    r#type: "button",
                    onclick: move |_| dispatch.call(FormAction::Clear),
                    "Clear"
                }
            }
        }
    }
}
