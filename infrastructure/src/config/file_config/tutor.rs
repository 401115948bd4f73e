//! Tutor configuration from TOML (`[tutor]` section)

use serde::{Deserialize, Serialize};
use tutor_domain::Persona;

/// Raw tutor configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTutorConfig {
    /// System instruction wording: "concise" or "thorough"
    pub persona: Option<Persona>,
}
