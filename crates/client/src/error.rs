use thiserror::Error;

use catalog_core::TransportError;

/// A failed API call. Never retried by the client.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RequestError {
    /// The server answered with a non-2xx status.
    #[error("API error ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Status {
        status: u16,
        message: Option<String>,
    },
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    #[error("encode error: {0}")]
    Encode(String),
    #[error("decode error: {0}")]
    Decode(String),
}

impl RequestError {
    /// HTTP status, when the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server-provided message, when the body carried one.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

impl From<TransportError> for RequestError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Timeout => Self::Timeout,
            TransportError::Connect(msg) => Self::Network(msg),
            TransportError::Body(msg) => Self::Decode(msg),
        }
    }
}
