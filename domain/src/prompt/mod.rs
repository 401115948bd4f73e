//! Prompt building for the math tutor.
//!
//! A request to the model is always an [`Exchange`]: the persona's system
//! instruction followed by the student's question, untouched.

mod exchange;
mod persona;

pub use exchange::{Exchange, PromptBuilder};
pub use persona::Persona;
