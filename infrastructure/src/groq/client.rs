//! HTTP client for Groq chat completions

use super::error::{GroqError, Result};
use super::protocol::{ApiErrorEnvelope, ChatCompletionRequest, ChatCompletionResponse};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, error};
use tutor_application::{ModelClient, ServiceError};
use tutor_domain::{Exchange, Model};

/// Default base URL of the OpenAI-compatible Groq API
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Everything the client needs to reach the service.
#[derive(Debug, Clone)]
pub struct GroqSettings {
    pub base_url: String,
    pub model: Model,
    pub api_key: SecretString,
}

impl GroqSettings {
    pub fn new(api_key: SecretString) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: Model::default(),
            api_key,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }
}

/// [`ModelClient`] backed by Groq's `/chat/completions` endpoint.
///
/// One request per call. No retries and no client-side timeout.
pub struct GroqModelClient {
    http: reqwest::Client,
    endpoint: String,
    model: Model,
    api_key: SecretString,
}

impl GroqModelClient {
    pub fn new(settings: GroqSettings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("virtual-teacher/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GroqError::ClientBuild(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: format!(
                "{}/chat/completions",
                settings.base_url.trim_end_matches('/')
            ),
            model: settings.model,
            api_key: settings.api_key,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn complete(&self, exchange: &Exchange) -> Result<String> {
        let request = ChatCompletionRequest::new(self.model.as_str(), exchange);
        debug!("POST {} (model: {})", self.endpoint, self.model);

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Groq request failed: {}", e);
                GroqError::from(e)
            })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|envelope| envelope.error.message)
                .unwrap_or(body);
            error!("Groq API error ({}): {}", status, message);
            return Err(GroqError::Status {
                status: status.as_u16(),
                body: message,
            });
        }

        let parsed: ChatCompletionResponse =
            serde_json::from_str(&body).map_err(|e| GroqError::Parse {
                error: e.to_string(),
                raw: body.clone(),
            })?;

        if let Some(usage) = parsed.usage {
            debug!(
                "Groq usage: {} prompt + {} completion tokens",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        parsed
            .first_content()
            .map(str::to_string)
            .ok_or(GroqError::EmptyChoices)
    }
}

#[async_trait]
impl ModelClient for GroqModelClient {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn ask(&self, exchange: &Exchange) -> std::result::Result<String, ServiceError> {
        self.complete(exchange).await.map_err(ServiceError::from)
    }
}
