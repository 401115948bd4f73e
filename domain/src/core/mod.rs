//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] - chat-completion models the tutor can ask
//! - [`question::Question`] - the raw question typed by the student
//! - [`error::DomainError`] - domain-level errors

pub mod error;
pub mod model;
pub mod question;
