use crate::{console_error, console_info, console_log, console_warn};
use dioxus::prelude::*;
use futures::channel::mpsc;
use futures::StreamExt;
use std::rc::Rc;

use crate::components::display::{
    ErrorPanel, LoadingIndicator, ResultPanel, ERROR_SECTION_ID, RESULT_SECTION_ID,
};
use crate::components::forms::MeasurementForm;
use crate::features::classifier::{
    elapsed_since, FormAction, FormController, Shortcut, UiPhase, UiState, FIRST_FIELD,
};
use crate::services::client::{HttpTransport, PredictionDispatcher};
use crate::services::config::ClassifierConfig;
use crate::utils::platform::{focus_element, now_ms, scroll_into_view, KeydownListener};

const IRIS_CLASSIFIER_CSS: Asset = asset!("/assets/styling/iris_classifier.css");

/// Render the panel below the form for the current UI state
fn render_panel(ui_state: UiState, dispatch: EventHandler<FormAction>) -> Element {
    match ui_state {
        UiState::Idle => rsx! {},
        UiState::Submitting => rsx! {
            LoadingIndicator { message: "Analyzing flower measurements...".to_string() }
        },
        UiState::ShowingResult(view) => rsx! {
            ResultPanel { view: view }
        },
        UiState::ShowingError { message, retryable } => rsx! {
            ErrorPanel {
                message: message,
                retryable: retryable,
                on_retry: move |_| dispatch.call(FormAction::DismissError)
            }
        },
    }
}

#[component]
pub fn IrisClassifier() -> Element {
    let mut state = use_signal(FormController::new);
    let dispatcher = use_hook(|| {
        Rc::new(PredictionDispatcher::new(
            HttpTransport::new(),
            ClassifierConfig::default(),
        ))
    });

    use_effect(move || {
        console_info!("🌸 Iris Classifier loaded successfully!");
        console_info!("💡 Tip: {}", Shortcut::hint());
        focus_element(FIRST_FIELD.name());
    });

    // Only react to panel changes, not to every keystroke
    let phase = use_memo(move || state.read().ui_state().phase());
    use_effect(move || match phase() {
        UiPhase::ShowingResult => scroll_into_view(RESULT_SECTION_ID),
        UiPhase::ShowingError => scroll_into_view(ERROR_SECTION_ID),
        UiPhase::Idle | UiPhase::Submitting => {}
    });

    // Dispatch function for synchronous actions - in-place reduction keeps Signal reactivity
    let dispatch = EventHandler::new(move |action: FormAction| {
        let focus = state.with_mut(|s| {
            s.reduce_in_place(action);
            s.take_focus_request()
        });
        if let Some(field) = focus {
            focus_element(field.name());
        }
    });

    let submit = EventHandler::new(move |_: ()| {
        // begin_submission refuses while a request is in flight
        let Some(request) = state.with_mut(|s| s.begin_submission()) else {
            return;
        };

        let dispatcher = dispatcher.clone();
        spawn(async move {
            let started = now_ms();
            let outcome = dispatcher.submit(&request).await;
            let elapsed = elapsed_since(started);

            if let Err(error) = &outcome {
                console_error!("Prediction error: {}", error);
            }
            state.with_mut(|s| s.finish_submission(outcome, Some(elapsed)));
            console_log!("Loading state reset");
        });
    });

    // Shortcuts are decided synchronously in the document listener so the
    // browser default can be suppressed; the actions run on the Dioxus runtime.
    let _keydown = use_hook(move || {
        let (shortcuts, mut pressed) = mpsc::unbounded::<Shortcut>();
        spawn(async move {
            while let Some(shortcut) = pressed.next().await {
                match shortcut {
                    Shortcut::Submit => {
                        if !state.read().is_submitting() {
                            submit.call(());
                        }
                    }
                    Shortcut::Clear => dispatch.call(FormAction::Clear),
                }
            }
        });

        Rc::new(KeydownListener::on_document(move |command_held, key| {
            match Shortcut::from_key(command_held, key) {
                Some(shortcut) => {
                    if shortcuts.unbounded_send(shortcut).is_err() {
                        console_warn!("Shortcut ignored, classifier is gone");
                    }
                    true
                }
                None => false,
            }
        }))
    });

    let ui_state = state.read().ui_state().clone();
    let hint = Shortcut::hint();

    rsx! {
        document::Link { rel: "stylesheet", href: IRIS_CLASSIFIER_CSS }

        div {
            class: "iris-classifier-container",

            div {
                class: "title-container",
                h1 {
                    class: "classifier-title",
                    "🌸 Iris Flower Classifier"
                }
                p {
                    class: "classifier-subtitle",
                    "Enter sepal and petal measurements to identify the iris species"
                }
            }

            MeasurementForm {
                state: state,
                dispatch: dispatch,
                on_submit: submit
            }

            {render_panel(ui_state, dispatch)}

            p {
                class: "shortcut-hint",
                "💡 {hint}"
            }
        }
    }
}
