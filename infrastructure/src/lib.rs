//! Infrastructure layer for wikibot
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod providers;
pub mod reference;
pub mod tools;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileAgentConfig, FileBedrockConfig, FileConfig,
    FileLoggingConfig, FileReplConfig, FileWikipediaConfig,
};
pub use logging::JsonlConversationLogger;
pub use providers::bedrock::BedrockLlmGateway;
pub use reference::WikipediaClient;
pub use tools::{
    ArticleTool, JsonSchemaToolConverter, ToolHandler, ToolRegistry, default_registry,
};
