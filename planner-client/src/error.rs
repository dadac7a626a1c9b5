//! Client error types

use shared::gateway::GatewayError;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Payload refused by the store
    #[error("Validation error: {0}")]
    Validation(String),

    /// Store-side failure
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// Map onto the gateway taxonomy; `NotFound` needs the record it was about.
    pub fn into_gateway(self, kind: &'static str, id: Option<&str>) -> GatewayError {
        match self {
            ClientError::NotFound(text) => match id {
                Some(id) => GatewayError::NotFound {
                    kind,
                    id: id.to_string(),
                },
                None => GatewayError::Transport(format!("{kind} collection not found: {text}")),
            },
            ClientError::Http(e) if e.is_decode() => GatewayError::Decode(e.to_string()),
            ClientError::Http(e) => GatewayError::Transport(e.to_string()),
            ClientError::Validation(text) => GatewayError::Rejected(text),
            ClientError::Internal(text) => GatewayError::Transport(text),
            ClientError::InvalidResponse(text) => GatewayError::Decode(text),
        }
    }
}
