use futures::future::{self, Either};
use futures::pin_mut;
use tracing::{info, instrument, warn};

use super::transport::{PredictionTransport, RawResponse};
use crate::features::classifier::{PredictionRequest, PredictionResponse};
use crate::services::config::ClassifierConfig;
use crate::services::errors::{ClassifierError, ClassifierResult};
use crate::utils::platform;

/// Posts prediction requests to the configured backend with a timeout
pub struct PredictionDispatcher<T: PredictionTransport> {
    transport: T,
    config: ClassifierConfig,
}

impl<T: PredictionTransport> PredictionDispatcher<T> {
    pub fn new(transport: T, config: ClassifierConfig) -> Self {
        Self { transport, config }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send one request and wait for the prediction.
    ///
    /// The transport races a timer; whichever finishes first decides the
    /// outcome and the other future is dropped, which cancels the pending
    /// timer or aborts the in-flight request. No retries.
    #[instrument(skip(self, request), fields(url = %self.config.backend_url), err)]
    pub async fn submit(&self, request: &PredictionRequest) -> ClassifierResult<PredictionResponse> {
        let exchange = self.transport.post_json(&self.config.backend_url, request);
        let timer = platform::sleep(self.config.request_timeout());
        pin_mut!(exchange, timer);

        let raw = match future::select(exchange, timer).await {
            Either::Left((outcome, _timer)) => outcome?,
            Either::Right(((), _abandoned)) => {
                warn!(
                    "Prediction request exceeded {}ms, abandoning it",
                    self.config.request_timeout_ms
                );
                return Err(ClassifierError::Timeout);
            }
        };

        let response = interpret(raw)?;
        info!("Received prediction: {}", response.prediction);
        Ok(response)
    }
}

/// Maps a completed exchange to a parsed response or an HTTP error
pub fn interpret(raw: RawResponse) -> ClassifierResult<PredictionResponse> {
    if !raw.is_success() {
        return Err(ClassifierError::Http {
            status: raw.status,
            status_text: raw.status_text,
        });
    }

    Ok(serde_json::from_str(&raw.body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(status: u16, status_text: &str, body: &str) -> RawResponse {
        RawResponse {
            status,
            status_text: status_text.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_interpret_success_body() {
        let response = interpret(raw(
            200,
            "OK",
            r#"{"prediction":"setosa","confidence":0.98}"#,
        ))
        .unwrap();
        assert_eq!(response.prediction, "setosa");
        assert_eq!(response.confidence, Some(0.98));
    }

    #[test]
    fn test_interpret_failure_status() {
        let error = interpret(raw(404, "Not Found", "missing")).unwrap_err();
        assert_eq!(
            error,
            ClassifierError::Http {
                status: 404,
                status_text: "Not Found".to_string()
            }
        );
    }

    #[test]
    fn test_interpret_garbage_body() {
        let error = interpret(raw(200, "OK", "<html>oops</html>")).unwrap_err();
        assert!(matches!(error, ClassifierError::InvalidResponse { .. }));

        let error = interpret(raw(200, "OK", r#"{"prediction":"setosa","confidence":"high"}"#))
            .unwrap_err();
        assert!(matches!(error, ClassifierError::InvalidResponse { .. }));
    }
}
