//! Domain error types

use crate::pipeline::Stage;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid pipeline transition: {from} -> {to}")]
    InvalidTransition { from: Stage, to: Stage },

    #[error("Pipeline state is not resolved (stage: {0})")]
    Unresolved(Stage),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_error_display() {
        let error = DomainError::InvalidTransition {
            from: Stage::Resolved,
            to: Stage::Classified,
        };
        assert_eq!(
            error.to_string(),
            "Invalid pipeline transition: resolved -> classified"
        );
    }

    #[test]
    fn test_unresolved_display() {
        assert_eq!(
            DomainError::Unresolved(Stage::Classified).to_string(),
            "Pipeline state is not resolved (stage: classified)"
        );
    }
}
