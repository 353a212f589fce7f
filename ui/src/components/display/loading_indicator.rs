use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct LoadingIndicatorProps {
    pub message: String,
}

/// Full-page overlay shown while a prediction is in flight
#[component]
pub fn LoadingIndicator(props: LoadingIndicatorProps) -> Element {
    rsx! {
        div {
            id: "loadingOverlay",
            class: "loading-overlay",
            div {
                class: "loading-indicator",
                div { class: "loading-spinner" }
                "⏳ {props.message}"
            }
        }
    }
}
