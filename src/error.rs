//! Error taxonomy for calls to the remote backend.
//!
//! ERROR HANDLING
//! ==============
//! Transport and backend-reported failures are caught at the view boundary
//! and rendered as an inline message. Views never crash on an `ApiError`.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, CORS, offline, ...).
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    /// The response body could not be decoded into the expected type.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// The body decoded as JSON but matched none of the accepted shapes.
    #[error("Unexpected data format received from server")]
    UnexpectedShape,
    /// Network calls are only available in the browser build.
    #[error("not available outside the browser")]
    Unavailable,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiError {
    /// Build a status error, extracting a `message` field from the body if present.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .map(|m| m.trim().to_owned())
            .filter(|m| !m.is_empty());
        Self::Status { status, message }
    }

    /// Text to show the user: the backend's own message when it sent one,
    /// otherwise the view's generic `fallback`.
    pub fn display_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message: Some(message), .. } => message.clone(),
            Self::UnexpectedShape => self.to_string(),
            _ => fallback.to_owned(),
        }
    }
}
