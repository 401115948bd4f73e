//! Model selection from TOML (`[model]` section)

use super::ConfigIssue;
use serde::{Deserialize, Serialize};
use tutor_domain::Model;

/// Raw model configuration from TOML
///
/// ```toml
/// [model]
/// name = "mixtral-8x7b-32768"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelConfig {
    /// Model identifier sent to the API
    pub name: Option<String>,
}

impl FileModelConfig {
    /// Parse the model name, collecting an issue for an empty name.
    pub fn parse_model(&self) -> (Option<Model>, Vec<ConfigIssue>) {
        match self.name.as_deref() {
            None => (None, Vec::new()),
            Some(s) if s.trim().is_empty() => (
                None,
                vec![ConfigIssue::error(
                    "model.name",
                    "model.name: model name cannot be empty",
                )],
            ),
            Some(s) => {
                let Ok(model) = s.trim().parse::<Model>();
                (Some(model), Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_name_is_custom() {
        let config = FileModelConfig {
            name: Some("qwen-qwq-32b".to_string()),
        };
        let (model, issues) = config.parse_model();
        assert_eq!(model, Some(Model::Custom("qwen-qwq-32b".to_string())));
        assert!(issues.is_empty());
    }

    #[test]
    fn test_empty_name_is_error() {
        let config = FileModelConfig {
            name: Some(String::new()),
        };
        let (model, issues) = config.parse_model();
        assert!(model.is_none());
        assert_eq!(issues[0].field, "model.name");
    }
}
