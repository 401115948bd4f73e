//! Serializable view of a resolved pipeline state

use crate::classification::Category;
use serde::{Deserialize, Serialize};

/// What the user gets to see once the pipeline is done.
///
/// Field order is the serialization order: `question, category, response`
/// for an answer, `error` alone for a rejection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StateRecord {
    Answered {
        question: String,
        category: Category,
        response: String,
    },
    Rejected {
        error: String,
    },
}

impl StateRecord {
    /// The single line shown in plain-text mode
    pub fn text(&self) -> &str {
        match self {
            StateRecord::Answered { response, .. } => response,
            StateRecord::Rejected { error } => error,
        }
    }
}
