//! Domain layer for wikibot
//!
//! This crate contains the core entities and value objects of the
//! question-answering agent. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Transcript
//!
//! One question is answered through a [`Transcript`]: an append-only list of
//! [`Message`]s exchanged with the model. Tool invocation requests only appear
//! in assistant messages; tool results only appear in user messages.
//!
//! ## Tool Loop
//!
//! The model either finishes its turn or asks for a tool. [`LoopState`]
//! captures that decision as an explicit two-state machine so the driver in
//! the application layer can enforce a round limit.

pub mod core;
pub mod orchestration;
pub mod prompt;
pub mod session;
pub mod tool;
pub mod util;

// Re-export commonly used types
pub use core::{error::DomainError, model::Model, question::Question};
pub use orchestration::loop_state::LoopState;
pub use prompt::SystemPrompt;
pub use session::{
    message::{Message, Role},
    response::{ContentBlock, LlmResponse, StopReason, ToolResultStatus},
    transcript::Transcript,
};
pub use tool::{
    entities::{ToolCall, ToolDefinition, ToolParameter, ToolSpec},
    traits::{DefaultToolValidator, ToolValidator},
    value_objects::{ToolError, ToolResult, ToolResultMetadata},
};
