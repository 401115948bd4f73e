//! Wire types for the OpenAI-compatible chat-completion endpoint.
//!
//! Only the fields the tutor reads are modelled; everything else in the
//! response is ignored.

use serde::{Deserialize, Serialize};
use tutor_domain::{Exchange, Message};

/// `POST /chat/completions` request body
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<WireMessage<'a>>,
}

impl<'a> ChatCompletionRequest<'a> {
    pub fn new(model: &'a str, exchange: &'a Exchange) -> Self {
        Self {
            model,
            messages: exchange.messages().iter().map(WireMessage::from).collect(),
        }
    }
}

/// Chat message as sent on the wire
#[derive(Debug, Clone, Serialize)]
pub struct WireMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

impl<'a> From<&'a Message> for WireMessage<'a> {
    fn from(message: &'a Message) -> Self {
        Self {
            role: message.role.as_str(),
            content: &message.content,
        }
    }
}

/// Response body
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl ChatCompletionResponse {
    /// Content of the first choice, if any
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.as_ref())
            .and_then(|m| m.content.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub index: u32,
    pub message: Option<ChoiceMessage>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub role: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

/// Error envelope returned with non-2xx statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tutor_domain::{PromptBuilder, Question};

    #[test]
    fn test_request_shape() {
        let exchange = PromptBuilder::default().build_exchange(&Question::new("2x + 3 = 7"));
        let request = ChatCompletionRequest::new("mixtral-8x7b-32768", &exchange);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "mixtral-8x7b-32768");
        assert_eq!(json["messages"].as_array().unwrap().len(), 2);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "2x + 3 = 7");
    }

    #[test]
    fn test_parse_response() {
        let raw = r#"{
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "model": "mixtral-8x7b-32768",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "x = 2"}, "finish_reason": "stop"}
            ],
            "usage": {"prompt_tokens": 40, "completion_tokens": 5, "total_tokens": 45}
        }"#;
        let response: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.first_content(), Some("x = 2"));
        assert_eq!(response.usage.unwrap().total_tokens, 45);
    }

    #[test]
    fn test_missing_content() {
        let response: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(response.first_content().is_none());
    }

    #[test]
    fn test_parse_error_envelope() {
        let raw = r#"{"error": {"message": "Invalid API Key", "type": "invalid_request_error"}}"#;
        let envelope: ApiErrorEnvelope = serde_json::from_str(raw).unwrap();
        assert_eq!(envelope.error.message, "Invalid API Key");
        assert_eq!(envelope.error.kind.as_deref(), Some("invalid_request_error"));
    }
}
