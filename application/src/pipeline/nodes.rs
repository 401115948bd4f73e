//! The tutor's three nodes

use super::{PipelineError, PipelineNode};
use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use crate::ports::model_client::ModelClient;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tutor_domain::{Category, MathClassifier, NOT_MATHEMATICAL, PipelineState, PromptBuilder};

/// Entry node: validates the question and files it under a category.
pub struct ReceptorNode {
    classifier: MathClassifier,
    logger: Arc<dyn ConversationLogger>,
}

impl ReceptorNode {
    pub fn new(classifier: MathClassifier, logger: Arc<dyn ConversationLogger>) -> Self {
        Self { classifier, logger }
    }
}

#[async_trait]
impl PipelineNode for ReceptorNode {
    fn name(&self) -> &'static str {
        "receptor"
    }

    async fn run(&self, state: &mut PipelineState) -> Result<(), PipelineError> {
        let question = state.question().content();
        self.logger.log(ConversationEvent::new(
            "question_received",
            serde_json::json!({ "question": question }),
        ));

        if self.classifier.classify(question) {
            state.classify_as(Category::Mathematics)?;
            debug!("Question classified as {}", Category::Mathematics);
        } else {
            warn!("Question rejected by classifier");
            self.logger.log(ConversationEvent::new(
                "question_rejected",
                serde_json::json!({ "question": question, "reason": NOT_MATHEMATICAL }),
            ));
            state.reject(NOT_MATHEMATICAL)?;
        }
        Ok(())
    }
}

/// Builds the exchange and asks the model.
pub struct VirtualTeacherNode {
    prompt: PromptBuilder,
    client: Arc<dyn ModelClient>,
    logger: Arc<dyn ConversationLogger>,
}

impl VirtualTeacherNode {
    pub fn new(
        prompt: PromptBuilder,
        client: Arc<dyn ModelClient>,
        logger: Arc<dyn ConversationLogger>,
    ) -> Self {
        Self {
            prompt,
            client,
            logger,
        }
    }
}

#[async_trait]
impl PipelineNode for VirtualTeacherNode {
    fn name(&self) -> &'static str {
        "virtual_teacher"
    }

    async fn run(&self, state: &mut PipelineState) -> Result<(), PipelineError> {
        let exchange = self.prompt.build_exchange(state.question());
        let model = self.client.model().to_string();

        info!(
            "Asking {} ({} persona, {} chars)",
            model,
            self.prompt.persona(),
            exchange.char_count()
        );
        self.logger.log(ConversationEvent::new(
            "model_request",
            serde_json::json!({
                "model": model,
                "persona": self.prompt.persona(),
                "messages": &exchange,
            }),
        ));

        let response = self.client.ask(&exchange).await?;

        self.logger.log(ConversationEvent::new(
            "model_response",
            serde_json::json!({
                "model": model,
                "bytes": response.len(),
                "text": response,
            }),
        ));
        state.answer(response)?;
        Ok(())
    }
}

/// Terminal node: checks that the state ended in a valid shape.
pub struct EndNode;

#[async_trait]
impl PipelineNode for EndNode {
    fn name(&self) -> &'static str {
        "end"
    }

    fn is_terminal(&self) -> bool {
        true
    }

    async fn run(&self, state: &mut PipelineState) -> Result<(), PipelineError> {
        state.record()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::conversation_logger::NoConversationLogger;
    use crate::ports::model_client::ServiceError;
    use std::sync::Mutex;
    use tutor_domain::{DomainError, Exchange, Model, Stage};

    struct EchoClient {
        model: Model,
    }

    #[async_trait]
    impl ModelClient for EchoClient {
        fn model(&self) -> &Model {
            &self.model
        }

        async fn ask(&self, exchange: &Exchange) -> Result<String, ServiceError> {
            Ok(format!("echo: {}", exchange.question().content))
        }
    }

    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<&'static str>>,
    }

    impl ConversationLogger for RecordingLogger {
        fn log(&self, event: ConversationEvent) {
            self.events.lock().unwrap().push(event.event_type);
        }
    }

    #[tokio::test]
    async fn test_receptor_accepts_math() {
        let node = ReceptorNode::new(MathClassifier::new(), Arc::new(NoConversationLogger));
        let mut state = PipelineState::received("3 * 4");
        node.run(&mut state).await.unwrap();

        assert_eq!(state.stage(), Stage::Classified);
        assert_eq!(state.category(), Some(Category::Mathematics));
    }

    #[tokio::test]
    async fn test_receptor_rejects_and_logs() {
        let logger = Arc::new(RecordingLogger::default());
        let node = ReceptorNode::new(MathClassifier::new(), logger.clone());
        let mut state = PipelineState::received("What is love?");
        node.run(&mut state).await.unwrap();

        assert_eq!(state.error(), Some(NOT_MATHEMATICAL));
        assert_eq!(
            *logger.events.lock().unwrap(),
            vec!["question_received", "question_rejected"]
        );
    }

    #[tokio::test]
    async fn test_virtual_teacher_answers() {
        let logger = Arc::new(RecordingLogger::default());
        let node = VirtualTeacherNode::new(
            PromptBuilder::default(),
            Arc::new(EchoClient {
                model: Model::default(),
            }),
            logger.clone(),
        );
        let mut state = PipelineState::received("1 + 1");
        state.classify_as(Category::Mathematics).unwrap();
        node.run(&mut state).await.unwrap();

        assert_eq!(state.response(), Some("echo: 1 + 1"));
        assert_eq!(
            *logger.events.lock().unwrap(),
            vec!["model_request", "model_response"]
        );
    }

    #[tokio::test]
    async fn test_end_rejects_unresolved_state() {
        let mut state = PipelineState::received("1 + 1");
        let result = EndNode.run(&mut state).await;
        assert!(matches!(
            result,
            Err(PipelineError::State(DomainError::Unresolved(Stage::Received)))
        ));
    }
}
