//! Error types for the Groq adapter

use thiserror::Error;
use tutor_application::ServiceError;

/// Result type alias for Groq operations
pub type Result<T> = std::result::Result<T, GroqError>;

/// Errors that can occur when calling the Groq API
#[derive(Error, Debug)]
pub enum GroqError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse response: {error}\nRaw response: {raw}")]
    Parse { error: String, raw: String },

    #[error("Response contained no message content")]
    EmptyChoices,

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

impl From<GroqError> for ServiceError {
    fn from(error: GroqError) -> Self {
        match error {
            GroqError::Transport(e) if e.is_decode() => {
                ServiceError::MalformedResponse(e.to_string())
            }
            GroqError::Transport(e) => ServiceError::Connection(e.to_string()),
            GroqError::Status { status, body } => match status {
                401 | 403 => ServiceError::Authentication(format!("HTTP {status}: {body}")),
                429 => ServiceError::QuotaExceeded(format!("HTTP {status}: {body}")),
                _ => ServiceError::RequestFailed {
                    status,
                    message: body,
                },
            },
            GroqError::Parse { error, .. } => ServiceError::MalformedResponse(error),
            GroqError::EmptyChoices => {
                ServiceError::MalformedResponse("no message content in response".to_string())
            }
            GroqError::ClientBuild(e) => ServiceError::Other(e),
        }
    }
}
