//! Conversation domain.
//!
//! - [`message::Message`]: a role-tagged list of content blocks
//! - [`response::LlmResponse`]: one model reply with its stop reason
//! - [`transcript::Transcript`]: the append-only history for one question

pub mod message;
pub mod response;
pub mod transcript;
