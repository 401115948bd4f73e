//! Presentation layer for virtual-teacher
//!
//! This crate contains the CLI definition, interactive prompts, output
//! formatters and progress reporters.

pub mod cli;
pub mod interactive;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat, PersonaArg};
pub use interactive::{Prompter, parse_format_choice};
pub use output::console::{ConsoleFormatter, OutputError};
pub use progress::reporter::{ProgressReporter, SimpleProgress};
