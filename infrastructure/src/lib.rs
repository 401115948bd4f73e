//! Infrastructure layer for virtual-teacher
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer, plus configuration and credential loading.

pub mod config;
pub mod credentials;
pub mod groq;
pub mod logging;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigLoader, FileConfig, Severity};
pub use credentials::{CredentialError, CredentialResolver, CredentialSource};
pub use groq::{
    client::{DEFAULT_BASE_URL, GroqModelClient, GroqSettings},
    error::GroqError,
};
pub use logging::JsonlConversationLogger;
