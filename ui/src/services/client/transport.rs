use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::features::classifier::PredictionRequest;
use crate::services::errors::ClassifierError;

/// Status line and body of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a prediction request over the wire.
///
/// Implementations only report connectivity failures; status handling and
/// body parsing belong to the dispatcher. Dropping the returned future must
/// abandon the request.
#[async_trait(?Send)]
pub trait PredictionTransport {
    async fn post_json(
        &self,
        url: &str,
        request: &PredictionRequest,
    ) -> Result<RawResponse, ClassifierError>;
}

/// reqwest-backed transport; in the browser this is a `fetch` that is
/// aborted when the future is dropped
#[derive(Clone, Default)]
pub struct HttpTransport {
    pub(crate) http_client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            http_client: Client::new(),
        }
    }
}

#[async_trait(?Send)]
impl PredictionTransport for HttpTransport {
    #[instrument(skip(self, request), err)]
    async fn post_json(
        &self,
        url: &str,
        request: &PredictionRequest,
    ) -> Result<RawResponse, ClassifierError> {
        let response = self
            .http_client
            .post(url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| ClassifierError::Network {
                message: format!("Failed to reach prediction service: {}", e),
            })?;

        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        let body = response.text().await?;

        debug!("Prediction service answered {} ({} bytes)", status, body.len());

        Ok(RawResponse {
            status: status.as_u16(),
            status_text,
            body,
        })
    }
}
