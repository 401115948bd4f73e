//! Console output formatter

use colored::Colorize;
use std::fmt::Display;
use thiserror::Error;
use tutor_domain::{DomainError, OutputFormat, PipelineState, StateRecord};

/// Errors raised while rendering a result
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("{0}")]
    State(#[from] DomainError),

    #[error("Failed to serialize result: {0}")]
    Json(#[from] serde_json::Error),
}

/// Formats results for stdout and diagnostics for stderr
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Render a resolved state in the requested format
    pub fn format(state: &PipelineState, format: OutputFormat) -> Result<String, OutputError> {
        Ok(Self::format_record(&state.record()?, format)?)
    }

    pub fn format_record(
        record: &StateRecord,
        format: OutputFormat,
    ) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Json => Self::format_json(record),
            OutputFormat::Text => Ok(Self::format_text(record)),
        }
    }

    /// Pretty JSON with non-ASCII text left as is
    pub fn format_json(record: &StateRecord) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(record)
    }

    /// The response, or the error text when there is none
    pub fn format_text(record: &StateRecord) -> String {
        record.text().to_string()
    }

    /// Globally enable or disable ANSI colors
    pub fn set_color_enabled(enabled: bool) {
        if !enabled {
            colored::control::set_override(false);
        }
    }

    /// A one-line diagnostic for stderr
    pub fn format_error(error: &dyn Display, hint: Option<&str>) -> String {
        let mut output = format!("{} {}", "error:".red().bold(), error);
        if let Some(hint) = hint {
            output.push_str(&format!("\n  {} {}", "hint:".cyan(), hint));
        }
        output
    }
}
