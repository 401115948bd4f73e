//! Groq chat-completion adapter
//!
//! Implements [`ModelClient`](tutor_application::ModelClient) over Groq's
//! OpenAI-compatible HTTP API.

pub mod client;
pub mod error;
pub mod protocol;
