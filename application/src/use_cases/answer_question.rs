//! Answer Question use case.
//!
//! Runs one question through the tutor pipeline:
//! 1. `receptor` classifies the question (rejections stop here)
//! 2. `virtual_teacher` builds the exchange and asks the model
//! 3. `end` checks that the state is resolved
//!
//! A rejection is an ordinary result. A failing model call is returned as
//! [`AnswerQuestionError::Service`].

use crate::pipeline::{
    EndNode, LinearPipeline, PipelineError, ReceptorNode, VirtualTeacherNode,
};
use crate::ports::conversation_logger::{ConversationLogger, NoConversationLogger};
use crate::ports::model_client::{ModelClient, ServiceError};
use crate::ports::progress::{NoProgress, PipelineProgress};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;
use tutor_domain::{DomainError, MathClassifier, Persona, PipelineState, PromptBuilder, Question};

/// Errors that can occur while answering a question.
#[derive(Error, Debug)]
pub enum AnswerQuestionError {
    #[error("Model service error: {0}")]
    Service(#[from] ServiceError),

    #[error("Pipeline state error: {0}")]
    InvalidState(#[from] DomainError),

    #[error("Pipeline wiring error: {0}")]
    Wiring(String),
}

impl From<PipelineError> for AnswerQuestionError {
    fn from(error: PipelineError) -> Self {
        match error {
            PipelineError::Service(e) => AnswerQuestionError::Service(e),
            PipelineError::State(e) => AnswerQuestionError::InvalidState(e),
            PipelineError::Empty => AnswerQuestionError::Wiring("pipeline has no nodes".to_string()),
        }
    }
}

/// Input for the [`AnswerQuestionUseCase`].
#[derive(Debug, Clone)]
pub struct AnswerQuestionInput {
    /// The student's question, as typed.
    pub question: Question,
    /// Which system instruction wording to use.
    pub persona: Persona,
}

impl AnswerQuestionInput {
    pub fn new(question: impl Into<Question>) -> Self {
        Self {
            question: question.into(),
            persona: Persona::default(),
        }
    }

    pub fn with_persona(mut self, persona: Persona) -> Self {
        self.persona = persona;
        self
    }
}

/// Use case for answering a single question.
pub struct AnswerQuestionUseCase {
    client: Arc<dyn ModelClient>,
    classifier: MathClassifier,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl Clone for AnswerQuestionUseCase {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            classifier: self.classifier,
            conversation_logger: self.conversation_logger.clone(),
        }
    }
}

impl AnswerQuestionUseCase {
    pub fn new(client: Arc<dyn ModelClient>) -> Self {
        Self {
            client,
            classifier: MathClassifier::new(),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Wire the three nodes for one persona.
    pub fn pipeline(&self, persona: Persona) -> Result<LinearPipeline, AnswerQuestionError> {
        let pipeline = LinearPipeline::builder()
            .then(ReceptorNode::new(
                self.classifier,
                self.conversation_logger.clone(),
            ))
            .then(VirtualTeacherNode::new(
                PromptBuilder::new(persona),
                self.client.clone(),
                self.conversation_logger.clone(),
            ))
            .then(EndNode)
            .build()?;
        Ok(pipeline)
    }

    /// Answer one question with the default persona.
    pub async fn process(
        &self,
        question: impl Into<Question>,
    ) -> Result<PipelineState, AnswerQuestionError> {
        self.execute(AnswerQuestionInput::new(question)).await
    }

    /// Execute without progress reporting.
    pub async fn execute(
        &self,
        input: AnswerQuestionInput,
    ) -> Result<PipelineState, AnswerQuestionError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute with progress callbacks.
    pub async fn execute_with_progress(
        &self,
        input: AnswerQuestionInput,
        progress: &dyn PipelineProgress,
    ) -> Result<PipelineState, AnswerQuestionError> {
        let pipeline = self.pipeline(input.persona)?;
        info!(
            "Starting pipeline [{}] with model {}",
            pipeline.node_names().join(" -> "),
            self.client.model()
        );

        let result = pipeline
            .invoke(PipelineState::received(input.question), progress)
            .await;
        progress.on_pipeline_finished();

        let state = result?;
        info!(
            "Pipeline finished ({})",
            if state.is_rejected() { "rejected" } else { "answered" }
        );
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tutor_domain::{Category, Exchange, Model, NOT_MATHEMATICAL, Role, StateRecord};

    // ==================== Test Mocks ====================

    struct StubClient {
        model: Model,
        reply: Result<String, ServiceError>,
        calls: AtomicUsize,
        last_exchange: Mutex<Option<Exchange>>,
    }

    impl StubClient {
        fn replying(text: &str) -> Self {
            Self::with_result(Ok(text.to_string()))
        }

        fn failing(error: ServiceError) -> Self {
            Self::with_result(Err(error))
        }

        fn with_result(reply: Result<String, ServiceError>) -> Self {
            Self {
                model: Model::default(),
                reply,
                calls: AtomicUsize::new(0),
                last_exchange: Mutex::new(None),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ModelClient for StubClient {
        fn model(&self) -> &Model {
            &self.model
        }

        async fn ask(&self, exchange: &Exchange) -> Result<String, ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_exchange.lock().unwrap() = Some(exchange.clone());
            self.reply.clone()
        }
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_math_question_is_answered() {
        let client = Arc::new(StubClient::replying("x = 2"));
        let use_case = AnswerQuestionUseCase::new(client.clone());

        let state = use_case.process("2x + 3 = 7").await.unwrap();

        assert_eq!(client.calls(), 1);
        assert_eq!(
            state.record().unwrap(),
            StateRecord::Answered {
                question: "2x + 3 = 7".to_string(),
                category: Category::Mathematics,
                response: "x = 2".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_non_math_question_never_reaches_model() {
        let client = Arc::new(StubClient::replying("unused"));
        let use_case = AnswerQuestionUseCase::new(client.clone());

        let state = use_case.process("What is love?").await.unwrap();

        assert_eq!(client.calls(), 0);
        assert_eq!(
            state.record().unwrap(),
            StateRecord::Rejected {
                error: NOT_MATHEMATICAL.to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_persona_reaches_exchange() {
        let client = Arc::new(StubClient::replying("ok"));
        let use_case = AnswerQuestionUseCase::new(client.clone());

        use_case
            .execute(AnswerQuestionInput::new("1 + 1").with_persona(Persona::Thorough))
            .await
            .unwrap();

        let exchange = client.last_exchange.lock().unwrap().clone().unwrap();
        assert_eq!(exchange.roles(), [Role::System, Role::User]);
        assert_eq!(exchange.system().content, Persona::Thorough.instruction());
        assert_eq!(exchange.question().content, "1 + 1");
    }

    #[tokio::test]
    async fn test_service_error_is_propagated() {
        let client = Arc::new(StubClient::failing(ServiceError::QuotaExceeded(
            "rate limited".to_string(),
        )));
        let use_case = AnswerQuestionUseCase::new(client.clone());

        let result = use_case.execute(AnswerQuestionInput::new("9 / 3")).await;

        assert_eq!(client.calls(), 1);
        assert!(matches!(
            result,
            Err(AnswerQuestionError::Service(ServiceError::QuotaExceeded(_)))
        ));
    }

    #[test]
    fn test_pipeline_wiring() {
        let use_case = AnswerQuestionUseCase::new(Arc::new(StubClient::replying("")));
        let pipeline = use_case.pipeline(Persona::Concise).unwrap();
        assert_eq!(
            pipeline.node_names(),
            vec!["receptor", "virtual_teacher", "end"]
        );
    }
}
