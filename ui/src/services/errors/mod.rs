use thiserror::Error;

/// Shown when a failure carries no message of its own
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Failed to get prediction. Please check your connection and try again.";

/// Failures that can happen after a valid form has been submitted.
///
/// The `Display` text is what the error panel shows.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassifierError {
    #[error("Request timeout. Please try again.")]
    Timeout,

    #[error("API Error: {status} {status_text}")]
    Http { status: u16, status_text: String },

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Unknown species prediction: {species}")]
    UnknownSpecies { species: String },

    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },
}

impl From<reqwest::Error> for ClassifierError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            ClassifierError::InvalidResponse {
                message: error.to_string(),
            }
        } else {
            ClassifierError::Network {
                message: error.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for ClassifierError {
    fn from(error: serde_json::Error) -> Self {
        ClassifierError::InvalidResponse {
            message: error.to_string(),
        }
    }
}

pub type ClassifierResult<T> = Result<T, ClassifierError>;

impl ClassifierError {
    /// Whether submitting the same measurements again could succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            ClassifierError::Timeout | ClassifierError::Network { .. } => true,
            ClassifierError::Http { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }

    /// Message for the error panel, never empty
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_FAILURE_MESSAGE.to_string()
        } else {
            message
        }
    }
}
