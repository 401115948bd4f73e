//! Domain layer for virtual-teacher
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Classifier**: a character-class heuristic deciding whether a question
//!   looks mathematical. Rejected questions never reach a model.
//! - **Exchange**: the persona instruction plus the raw question, in that order.
//! - **PipelineState**: the write-once record moved through
//!   `Received → Classified → Resolved`.

pub mod classification;
pub mod config;
pub mod core;
pub mod pipeline;
pub mod prompt;
pub mod session;

// Re-export commonly used types
pub use classification::{Category, MathClassifier};
pub use config::OutputFormat;
pub use core::{error::DomainError, model::Model, question::Question};
pub use pipeline::{NOT_MATHEMATICAL, PipelineState, Stage, StateRecord};
pub use prompt::{Exchange, Persona, PromptBuilder};
pub use session::entities::{Message, Role};
