use dioxus::prelude::*;

use crate::features::classifier::Species;

#[derive(Props, PartialEq, Clone)]
pub struct SampleButtonsProps {
    pub disabled: bool,
    pub on_select: EventHandler<Species>,
}

/// One autofill button per species
#[component]
pub fn SampleButtons(props: SampleButtonsProps) -> Element {
    rsx! {
        div {
            class: "sample-section",
            span { class: "sample-label", "Try a sample:" }
            for species in Species::ALL {
                button {
                    key: "{species.key()}",
                    class: "sample-btn",
                    r#type: "button",
                    "data-species": "{species.key()}",
                    disabled: props.disabled,
                    onclick: move |_| props.on_select.call(species),
                    "{species.info().emoji} {species.display_name()}"
                }
            }
        }
    }
}
