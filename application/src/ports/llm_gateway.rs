//! LLM Gateway port
//!
//! Defines the interface for communicating with the remote model service.
//! The service is stateless from the caller's point of view: every request
//! carries the full transcript, the system instruction and the tool
//! declarations.

use crate::config::InferenceParams;
use async_trait::async_trait;
use thiserror::Error;
use wikibot_domain::{LlmResponse, Message, Model};

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Throttled: {0}")]
    Throttled(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// One request to the model service.
#[derive(Debug, Clone, Copy)]
pub struct ConverseRequest<'a> {
    /// Model to invoke
    pub model: &'a Model,
    /// Fixed system instruction
    pub system_prompt: &'a str,
    /// Full transcript so far, oldest first
    pub messages: &'a [Message],
    /// Tool declarations as provider-neutral JSON Schema
    pub tools: &'a [serde_json::Value],
    /// Sampling parameters
    pub inference: &'a InferenceParams,
}

/// Gateway for LLM communication
///
/// This port defines how the application layer talks to the model service.
/// Implementations (adapters) live in the infrastructure layer and are handed
/// to the use case at construction time.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send the conversation and return the model's next message.
    async fn converse(&self, request: &ConverseRequest<'_>) -> Result<LlmResponse, GatewayError>;
}
