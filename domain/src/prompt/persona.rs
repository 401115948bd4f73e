//! Tutor persona (system instruction wording)

use serde::{Deserialize, Serialize};

/// The system instruction given to the model.
///
/// Both wordings describe a step-by-step math teacher; they differ only in how
/// much detail the explanation should contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    /// Explain step by step, focusing on the minimum details (default)
    #[default]
    Concise,
    /// Explain step by step, focusing on every detail
    Thorough,
}

impl Persona {
    pub fn as_str(&self) -> &'static str {
        match self {
            Persona::Concise => "concise",
            Persona::Thorough => "thorough",
        }
    }

    /// The system instruction text for this persona
    pub fn instruction(&self) -> &'static str {
        match self {
            Persona::Concise => {
                "You're a math teacher who specializes in helping students with calculus, \
algebra and geometry problems. Explain every solution clearly and step by step, \
focusing on the minimum details."
            }
            Persona::Thorough => {
                "You are a math teacher specializing in calculus, algebra, and geometry. \
Explain each solution clearly, step by step, focusing on every detail."
            }
        }
    }
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
