use std::time::Duration;

/// Prediction endpoint
pub const BACKEND_URL: &str = "https://lovnishverma-iris-backend.hf.space/predict";

/// How long a prediction may take before it is abandoned
pub const REQUEST_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierConfig {
    pub backend_url: String,
    pub request_timeout_ms: u64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            backend_url: BACKEND_URL.to_string(),
            request_timeout_ms: REQUEST_TIMEOUT_MS, // 30 seconds
        }
    }
}

impl ClassifierConfig {
    pub fn with_backend_url(mut self, backend_url: impl Into<String>) -> Self {
        self.backend_url = backend_url.into();
        self
    }

    pub fn with_timeout_ms(mut self, request_timeout_ms: u64) -> Self {
        self.request_timeout_ms = request_timeout_ms;
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
