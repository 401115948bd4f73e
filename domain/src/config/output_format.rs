//! Output format value object

use serde::{Deserialize, Serialize};

/// How a resolved answer is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// A single plain-text line (default)
    #[default]
    Text,
    /// Pretty-printed JSON record
    Json,
}
