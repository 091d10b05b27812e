//! Planning client error types.

/// Errors that can occur when talking to the planning service.
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service returned an error status code. The body is carried for
    /// logging only; the service's error format is not part of the contract.
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response received but the JSON payload could not be parsed.
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },
}

impl PlannerError {
    /// Whether this error happened before any response was received.
    pub fn is_transport(&self) -> bool {
        matches!(self, PlannerError::Http(_))
    }
}
