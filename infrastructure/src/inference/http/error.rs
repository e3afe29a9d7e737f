//! Error types for the HTTP inference adapter

use streamchat_application::InferenceError;
use thiserror::Error;

/// Result type alias for HTTP adapter operations
pub type Result<T> = std::result::Result<T, HttpInferenceError>;

/// Errors that can occur when talking to the inference endpoint over HTTP
#[derive(Error, Debug)]
pub enum HttpInferenceError {
    #[error("Invalid endpoint URL '{0}'")]
    InvalidEndpoint(String),

    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Endpoint is not healthy: {0}")]
    Unhealthy(String),

    #[error("Malformed stream frame: {error}\nRaw line: {raw}")]
    MalformedFrame { error: String, raw: String },
}

impl From<HttpInferenceError> for InferenceError {
    fn from(err: HttpInferenceError) -> Self {
        let message = err.to_string();
        match err {
            HttpInferenceError::Transport(e) if e.is_connect() => {
                InferenceError::Connection(message)
            }
            HttpInferenceError::InvalidEndpoint(_) | HttpInferenceError::Unhealthy(_) => {
                InferenceError::Connection(message)
            }
            HttpInferenceError::MalformedFrame { .. } => InferenceError::Stream(message),
            HttpInferenceError::Transport(_) | HttpInferenceError::Status { .. } => {
                InferenceError::RequestFailed(message)
            }
        }
    }
}
