//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: Bedrock-hosted models the agent can talk to
//! - [`question::Question`]: a validated question from the user
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
pub mod question;
