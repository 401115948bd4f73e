//! Model Client port
//!
//! Defines the interface for asking a hosted chat-completion model.
//! Model identity, credentials and endpoint all live in the adapter.

use async_trait::async_trait;
use thiserror::Error;
use tutor_domain::{Exchange, Model};

/// Errors that can occur while talking to the remote model service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("Request failed with status {status}: {message}")]
    RequestFailed { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl ServiceError {
    /// A short hint for the person at the terminal
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            ServiceError::Connection(_) => Some("check your network connection"),
            ServiceError::Authentication(_) => Some("check that your API key is valid"),
            ServiceError::QuotaExceeded(_) => Some("wait a moment or check your plan limits"),
            _ => None,
        }
    }
}

/// Client for a remote chat-completion service.
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// The model this client sends requests to
    fn model(&self) -> &Model;

    /// Send the exchange and return the generated text
    async fn ask(&self, exchange: &Exchange) -> Result<String, ServiceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_display() {
        let error = ServiceError::RequestFailed {
            status: 500,
            message: "internal".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Request failed with status 500: internal"
        );
    }

    #[test]
    fn test_hints() {
        assert!(ServiceError::Authentication("401".into()).hint().is_some());
        assert!(ServiceError::MalformedResponse("x".into()).hint().is_none());
    }
}
