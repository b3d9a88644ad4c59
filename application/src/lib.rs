//! Application layer for wikibot
//!
//! This crate contains the question-answering use case, the port definitions
//! it drives, and application configuration. It depends only on the domain
//! layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ExecutionParams, InferenceParams};
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{ConverseRequest, GatewayError, LlmGateway},
    progress::{AskProgressNotifier, NoProgress},
    reference_corpus::{CorpusError, ReferenceCorpus},
    tool_executor::ToolExecutorPort,
    tool_schema::ToolSchemaPort,
};
pub use use_cases::answer_question::{
    AnswerOutput, AnswerQuestionError, AnswerQuestionInput, AnswerQuestionUseCase,
};
