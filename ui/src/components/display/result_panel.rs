use dioxus::prelude::*;

use super::ProbabilityBars;
use crate::features::classifier::ResultView;

/// Element id the page scrolls to when a prediction arrives
pub const RESULT_SECTION_ID: &str = "resultSection";

#[derive(Props, PartialEq, Clone)]
pub struct ResultPanelProps {
    pub view: ResultView,
}

#[component]
pub fn ResultPanel(props: ResultPanelProps) -> Element {
    let view = props.view;
    let confidence = view.confidence_label().zip(view.confidence_style());

    rsx! {
        div {
            id: RESULT_SECTION_ID,
            class: "result-section",

            div {
                class: "species-card",
                div { id: "speciesEmoji", class: "species-emoji", "{view.emoji}" }
                div {
                    class: "species-names",
                    h3 { id: "speciesName", class: "species-name", "{view.display_name}" }
                    p { id: "speciesLatin", class: "species-latin", "{view.latin_name}" }
                }
            }

            if let Some((label, style)) = confidence {
                div {
                    class: "confidence",
                    div {
                        class: "confidence-header",
                        span { "Confidence" }
                        span { id: "confidenceValue", class: "confidence-value", "{label}" }
                    }
                    div {
                        class: "confidence-track",
                        div { id: "confidenceProgress", class: "confidence-progress", style: "{style}" }
                    }
                }
            }

            if let Some(bars) = view.probabilities.clone() {
                ProbabilityBars { bars: bars }
            }

            if let Some(elapsed) = view.elapsed_ms {
                p {
                    class: "processing-time",
                    "Processing time: "
                    span { id: "processingTime", "{elapsed}" }
                    " ms"
                }
            }
        }
    }
}
