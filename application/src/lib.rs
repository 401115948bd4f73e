//! Application layer for virtual-teacher
//!
//! This crate contains the answer-question use case, the pipeline node
//! wiring, and port definitions. It depends only on the domain layer.

pub mod pipeline;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use pipeline::{LinearPipeline, PipelineError, PipelineNode};
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    model_client::{ModelClient, ServiceError},
    progress::{NoProgress, PipelineProgress},
};
pub use use_cases::answer_question::{
    AnswerQuestionError, AnswerQuestionInput, AnswerQuestionUseCase,
};
