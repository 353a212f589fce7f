use dioxus::prelude::*;

use crate::features::classifier::ProbabilityBar;

#[derive(Props, PartialEq, Clone)]
pub struct ProbabilityBarsProps {
    pub bars: Vec<ProbabilityBar>,
}

#[component]
pub fn ProbabilityBars(props: ProbabilityBarsProps) -> Element {
    rsx! {
        div {
            class: "probabilities",
            h4 { class: "probabilities-title", "Class Probabilities" }
            for bar in props.bars.iter() {
                div {
                    key: "{bar.species.key()}",
                    class: "probability-row",
                    span { class: "probability-label", "{bar.species.display_name()}" }
                    div {
                        class: "probability-track",
                        div {
                            id: "{bar.species.key()}Prob",
                            class: "probability-fill {bar.species.key()}",
                            style: "width: {bar.percentage}%; background-color: {bar.species.info().color};"
                        }
                    }
                    span {
                        id: "{bar.species.key()}Pct",
                        class: "probability-value",
                        "{bar.percentage}%"
                    }
                }
            }
        }
    }
}
