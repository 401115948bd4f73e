use serde::{Deserialize, Serialize};

/// Subject a question was filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Mathematics,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Mathematics => "mathematics",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&Category::Mathematics).unwrap();
        assert_eq!(json, "\"mathematics\"");
    }
}
