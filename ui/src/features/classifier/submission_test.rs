//! End-to-end submission tests: form values in, rendered UI state out

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use crate::features::classifier::*;
    use crate::services::client::{PredictionDispatcher, PredictionTransport, RawResponse};
    use crate::services::config::ClassifierConfig;
    use crate::services::errors::ClassifierError;
    use async_trait::async_trait;
    use std::cell::Cell;

    struct ScriptedTransport {
        status: u16,
        status_text: &'static str,
        body: &'static str,
        hang: bool,
        calls: Cell<usize>,
    }

    impl ScriptedTransport {
        fn answering(status: u16, status_text: &'static str, body: &'static str) -> Self {
            Self {
                status,
                status_text,
                body,
                hang: false,
                calls: Cell::new(0),
            }
        }

        fn hanging() -> Self {
            Self {
                hang: true,
                ..Self::answering(200, "OK", "{}")
            }
        }
    }

    #[async_trait(?Send)]
    impl PredictionTransport for ScriptedTransport {
        async fn post_json(
            &self,
            _url: &str,
            _request: &PredictionRequest,
        ) -> Result<RawResponse, ClassifierError> {
            self.calls.set(self.calls.get() + 1);
            if self.hang {
                futures::future::pending::<()>().await;
            }
            Ok(RawResponse {
                status: self.status,
                status_text: self.status_text.to_string(),
                body: self.body.to_string(),
            })
        }
    }

    fn dispatcher(transport: ScriptedTransport) -> PredictionDispatcher<ScriptedTransport> {
        PredictionDispatcher::new(transport, ClassifierConfig::default())
    }

    fn versicolor_form() -> FormController {
        let mut controller = FormController::new();
        controller.load_sample("versicolor");
        controller
    }

    #[tokio::test]
    async fn test_successful_prediction_is_rendered() {
        let dispatcher = dispatcher(ScriptedTransport::answering(
            200,
            "OK",
            r#"{"prediction":"versicolor","confidence":0.87,"probabilities":{"setosa":0.02,"versicolor":0.87,"virginica":0.11}}"#,
        ));
        let mut controller = versicolor_form();

        controller.submit(&dispatcher).await;

        let view = controller
            .ui_state()
            .result()
            .expect("result panel should be showing");
        assert_eq!(view.display_name, "Versicolor");
        assert_eq!(view.confidence_label().as_deref(), Some("87%"));
        let bars: Vec<u32> = view
            .probabilities
            .as_ref()
            .unwrap()
            .iter()
            .map(|bar| bar.percentage)
            .collect();
        assert_eq!(bars, vec![2, 87, 11]);
        assert!(view.elapsed_ms.is_some());
        assert!(!controller.is_submitting());
    }

    #[tokio::test]
    async fn test_server_error_is_shown_with_status() {
        let dispatcher = dispatcher(ScriptedTransport::answering(
            500,
            "Internal Server Error",
            "",
        ));
        let mut controller = versicolor_form();

        controller.submit(&dispatcher).await;

        let message = controller.ui_state().error_message().unwrap();
        assert!(message.contains("500"), "got {:?}", message);
        assert!(!controller.is_submitting());
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_is_shown_literally() {
        let dispatcher = dispatcher(ScriptedTransport::hanging());
        let mut controller = versicolor_form();

        controller.submit(&dispatcher).await;

        assert_eq!(
            controller.ui_state().error_message(),
            Some("Request timeout. Please try again.")
        );
        assert!(!controller.is_submitting());
    }

    #[tokio::test]
    async fn test_unknown_species_is_an_error_not_a_partial_result() {
        let dispatcher = dispatcher(ScriptedTransport::answering(
            200,
            "OK",
            r#"{"prediction":"sunflower","confidence":0.99}"#,
        ));
        let mut controller = versicolor_form();

        controller.submit(&dispatcher).await;

        assert!(controller.ui_state().result().is_none());
        assert_eq!(
            controller.ui_state().error_message(),
            Some("Unknown species prediction: sunflower")
        );
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_the_backend() {
        let dispatcher = dispatcher(ScriptedTransport::answering(200, "OK", "{}"));
        let mut controller = FormController::new();
        controller.on_change(MeasurementField::SepalLength, "5.0");

        controller.submit(&dispatcher).await;

        assert_eq!(dispatcher.transport().calls.get(), 0);
        assert_eq!(controller.ui_state(), &UiState::Idle);
        assert!(controller.has_field_errors());
    }

    #[tokio::test]
    async fn test_form_is_usable_after_an_error() {
        let failing = dispatcher(ScriptedTransport::answering(503, "Service Unavailable", ""));
        let working = dispatcher(ScriptedTransport::answering(
            200,
            "OK",
            r#"{"prediction":"setosa"}"#,
        ));
        let mut controller = versicolor_form();

        controller.submit(&failing).await;
        assert!(controller.ui_state().error_message().is_some());

        controller.submit(&working).await;
        assert_eq!(
            controller.ui_state().result().map(|view| view.species),
            Some(Species::Setosa)
        );
    }

    #[tokio::test]
    async fn test_clear_after_result_hides_panels() {
        let dispatcher = dispatcher(ScriptedTransport::answering(
            200,
            "OK",
            r#"{"prediction":"virginica","confidence":0.91}"#,
        ));
        let mut controller = versicolor_form();
        controller.submit(&dispatcher).await;
        assert_eq!(controller.ui_state().phase(), UiPhase::ShowingResult);

        controller.clear();

        assert_eq!(controller.ui_state().phase(), UiPhase::Idle);
        assert!(controller.ui_state().result().is_none());
        assert!(controller.ui_state().error_message().is_none());
        for field in MeasurementField::ALL {
            assert_eq!(controller.value(field), "");
        }
    }
}
