use dioxus::prelude::*;

/// Element id the page scrolls to when a submission fails
pub const ERROR_SECTION_ID: &str = "errorSection";

#[derive(Props, PartialEq, Clone)]
pub struct ErrorPanelProps {
    pub message: String,
    /// Label the dismiss control "Try Again" only when a resend could succeed
    pub retryable: bool,
    pub on_retry: EventHandler<()>,
}

#[component]
pub fn ErrorPanel(props: ErrorPanelProps) -> Element {
    rsx! {
        div {
            id: ERROR_SECTION_ID,
            class: "error-section",
            div { class: "error-icon", "⚠️" }
            div {
                class: "error-content",
                h3 { "Prediction Failed" }
                p { id: "errorMessage", class: "error-text", "{props.message}" }
            }
            button {
                id: "retryBtn",
                class: "retry-button",
                r#type: "button",
                onclick: move |_| props.on_retry.call(()),
                if props.retryable { "Try Again" } else { "Dismiss" }
            }
        }
    }
}
