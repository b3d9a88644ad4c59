//! LLM provider adapters
//!
//! Implementations of the [`LlmGateway`](wikibot_application::LlmGateway)
//! port for concrete model services.

pub mod bedrock;
