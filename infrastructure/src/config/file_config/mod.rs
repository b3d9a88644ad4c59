//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Conversions into application types live next to each section.

mod agent;
mod bedrock;
mod logging;
mod repl;
mod wikipedia;

pub use agent::FileAgentConfig;
pub use bedrock::FileBedrockConfig;
pub use logging::FileLoggingConfig;
pub use repl::FileReplConfig;
pub use wikipedia::FileWikipediaConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigValidationError {
    #[error("{0} cannot be 0")]
    InvalidTimeout(&'static str),

    #[error("agent.max_tool_turns cannot be 0")]
    InvalidMaxToolTurns,

    #[error("wikipedia.search_limit cannot be 0")]
    InvalidSearchLimit,

    #[error("bedrock.model cannot be empty")]
    EmptyModelName,

    #[error("bedrock.max_tokens cannot be 0")]
    InvalidMaxTokens,

    #[error("wikipedia.api_url cannot be empty")]
    EmptyApiUrl,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model service settings
    pub bedrock: FileBedrockConfig,
    /// Tool loop settings
    pub agent: FileAgentConfig,
    /// Encyclopedia client settings
    pub wikipedia: FileWikipediaConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Conversation log settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning every problem found.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.bedrock.model.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyModelName);
        }
        if self.bedrock.max_tokens == 0 {
            issues.push(ConfigValidationError::InvalidMaxTokens);
        }
        if self.agent.max_tool_turns == 0 {
            issues.push(ConfigValidationError::InvalidMaxToolTurns);
        }
        if self.agent.request_timeout_seconds == Some(0) {
            issues.push(ConfigValidationError::InvalidTimeout(
                "agent.request_timeout_seconds",
            ));
        }
        if self.wikipedia.api_url.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyApiUrl);
        }
        if self.wikipedia.search_limit == 0 {
            issues.push(ConfigValidationError::InvalidSearchLimit);
        }
        if self.wikipedia.timeout_seconds == 0 {
            issues.push(ConfigValidationError::InvalidTimeout(
                "wikipedia.timeout_seconds",
            ));
        }

        issues
    }
}
