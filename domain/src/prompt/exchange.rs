//! Exchange value object and its builder

use super::persona::Persona;
use crate::core::question::Question;
use crate::session::entities::{Message, Role};
use serde::Serialize;

/// The two-message payload sent to the model: persona, then question.
///
/// Only [`PromptBuilder`] constructs one, so the order and length are fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Exchange {
    messages: [Message; 2],
}

impl Exchange {
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn system(&self) -> &Message {
        &self.messages[0]
    }

    pub fn question(&self) -> &Message {
        &self.messages[1]
    }

    /// Total characters across both messages
    pub fn char_count(&self) -> usize {
        self.messages.iter().map(|m| m.content.chars().count()).sum()
    }

    pub fn roles(&self) -> [Role; 2] {
        [self.messages[0].role, self.messages[1].role]
    }
}

/// Builds a fresh [`Exchange`] for every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptBuilder {
    persona: Persona,
}

impl PromptBuilder {
    pub fn new(persona: Persona) -> Self {
        Self { persona }
    }

    pub fn persona(&self) -> Persona {
        self.persona
    }

    pub fn build_exchange(&self, question: &Question) -> Exchange {
        Exchange {
            messages: [
                Message::system(self.persona.instruction()),
                Message::user(question.content()),
            ],
        }
    }
}
