//! Pipeline state machine

use super::record::StateRecord;
use crate::classification::Category;
use crate::core::error::DomainError;
use crate::core::question::Question;
use serde::{Deserialize, Serialize};

/// Error text recorded when the classifier turns a question away
pub const NOT_MATHEMATICAL: &str = "The question does not seem to be mathematical.";

/// Where a question is in the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Only the question is known
    Received,
    /// The question passed the classifier and has a category
    Classified,
    /// Either a response or an error is set (terminal)
    Resolved,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Received => "received",
            Stage::Classified => "classified",
            Stage::Resolved => "resolved",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The record each stage adds to.
///
/// Fields are write-once and the stage only moves forward. A resolved state
/// carries exactly one of `response` / `error`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineState {
    stage: Stage,
    question: Question,
    category: Option<Category>,
    response: Option<String>,
    error: Option<String>,
}

impl PipelineState {
    /// Entry state holding only the question
    pub fn received(question: impl Into<Question>) -> Self {
        Self {
            stage: Stage::Received,
            question: question.into(),
            category: None,
            response: None,
            error: None,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn response(&self) -> Option<&str> {
        self.response.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_resolved(&self) -> bool {
        self.stage == Stage::Resolved
    }

    pub fn is_rejected(&self) -> bool {
        self.error.is_some()
    }

    /// `Received → Classified`
    pub fn classify_as(&mut self, category: Category) -> Result<(), DomainError> {
        self.transition(Stage::Received, Stage::Classified)?;
        self.category = Some(category);
        Ok(())
    }

    /// `Classified → Resolved` with the model's reply
    pub fn answer(&mut self, response: impl Into<String>) -> Result<(), DomainError> {
        self.transition(Stage::Classified, Stage::Resolved)?;
        self.response = Some(response.into());
        Ok(())
    }

    /// `Received | Classified → Resolved` with an error message
    pub fn reject(&mut self, error: impl Into<String>) -> Result<(), DomainError> {
        if self.stage == Stage::Resolved {
            return Err(DomainError::InvalidTransition {
                from: self.stage,
                to: Stage::Resolved,
            });
        }
        self.stage = Stage::Resolved;
        self.error = Some(error.into());
        Ok(())
    }

    /// The visible fields of a resolved state
    pub fn record(&self) -> Result<StateRecord, DomainError> {
        match (self.stage, &self.response, &self.error) {
            (Stage::Resolved, _, Some(error)) => Ok(StateRecord::Rejected {
                error: error.clone(),
            }),
            (Stage::Resolved, Some(response), None) => Ok(StateRecord::Answered {
                question: self.question.content().to_string(),
                category: self.category.unwrap_or_default(),
                response: response.clone(),
            }),
            (stage, _, _) => Err(DomainError::Unresolved(stage)),
        }
    }

    fn transition(&mut self, expected: Stage, to: Stage) -> Result<(), DomainError> {
        if self.stage != expected {
            return Err(DomainError::InvalidTransition {
                from: self.stage,
                to,
            });
        }
        self.stage = to;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_received_holds_only_question() {
        let state = PipelineState::received("2x + 3 = 7");
        assert_eq!(state.stage(), Stage::Received);
        assert_eq!(state.question().content(), "2x + 3 = 7");
        assert!(state.category().is_none());
        assert!(state.response().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_answer_path() {
        let mut state = PipelineState::received("2x + 3 = 7");
        state.classify_as(Category::Mathematics).unwrap();
        assert_eq!(state.stage(), Stage::Classified);
        state.answer("x = 2").unwrap();

        assert!(state.is_resolved());
        assert!(!state.is_rejected());
        assert_eq!(
            state.record().unwrap(),
            StateRecord::Answered {
                question: "2x + 3 = 7".to_string(),
                category: Category::Mathematics,
                response: "x = 2".to_string(),
            }
        );
    }

    #[test]
    fn test_reject_from_received() {
        let mut state = PipelineState::received("What is love?");
        state.reject(NOT_MATHEMATICAL).unwrap();

        assert!(state.is_resolved());
        assert!(state.response().is_none());
        assert_eq!(
            state.record().unwrap(),
            StateRecord::Rejected {
                error: NOT_MATHEMATICAL.to_string()
            }
        );
    }

    #[test]
    fn test_cannot_answer_before_classification() {
        let mut state = PipelineState::received("1 + 1");
        let err = state.answer("2").unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidTransition {
                from: Stage::Received,
                to: Stage::Resolved
            }
        );
        assert!(state.response().is_none());
    }

    #[test]
    fn test_resolved_is_terminal() {
        let mut state = PipelineState::received("1 + 1");
        state.classify_as(Category::Mathematics).unwrap();
        state.answer("2").unwrap();

        assert!(state.answer("3").is_err());
        assert!(state.reject("late").is_err());
        assert!(state.classify_as(Category::Mathematics).is_err());
        assert_eq!(state.response(), Some("2"));
        assert!(state.error().is_none());
    }

    #[test]
    fn test_record_requires_resolution() {
        let mut state = PipelineState::received("1 + 1");
        assert_eq!(
            state.record().unwrap_err(),
            DomainError::Unresolved(Stage::Received)
        );
        state.classify_as(Category::Mathematics).unwrap();
        assert_eq!(
            state.record().unwrap_err(),
            DomainError::Unresolved(Stage::Classified)
        );
    }

    #[test]
    fn test_stage_order() {
        assert!(Stage::Received < Stage::Classified);
        assert!(Stage::Classified < Stage::Resolved);
    }
}
