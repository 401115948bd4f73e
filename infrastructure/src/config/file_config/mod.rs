//! Raw TOML configuration data types
//!
//! These structs mirror the config file layout and use domain types where a
//! value has a closed set of options.

mod logging;
mod model;
mod output;
mod provider;
mod tutor;

pub use logging::FileLoggingConfig;
pub use model::FileModelConfig;
pub use output::FileOutputConfig;
pub use provider::FileProviderConfig;
pub use tutor::FileTutorConfig;

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model selection
    pub model: FileModelConfig,
    /// Tutor persona
    pub tutor: FileTutorConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Remote service settings (credential lookup, endpoint)
    pub provider: FileProviderConfig,
    /// Conversation log settings
    pub logging: FileLoggingConfig,
}

/// How bad a configuration issue is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The configuration cannot work.
    Error,
    /// The configuration works but is probably not what was meant.
    Warning,
}

/// A problem found while validating [`FileConfig`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub field: &'static str,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            field,
            message: message.into(),
        }
    }

    pub fn warning(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            field,
            message: message.into(),
        }
    }
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.model.parse_model().1);
        issues.extend(self.provider.validate());
        issues
    }

    /// True if any issue is an error
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(|i| i.severity == Severity::Error)
    }
}
