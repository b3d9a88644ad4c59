//! Tool loop configuration from TOML (`[agent]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;
use wikibot_application::ExecutionParams;

/// Raw agent configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAgentConfig {
    /// Maximum tool rounds per question
    pub max_tool_turns: usize,
    /// Timeout in seconds for each model request (absent = wait indefinitely)
    pub request_timeout_seconds: Option<u64>,
    /// Cap on tool output bytes handed back to the model (absent = verbatim)
    pub max_tool_result_bytes: Option<usize>,
}

impl Default for FileAgentConfig {
    fn default() -> Self {
        let params = ExecutionParams::default();
        Self {
            max_tool_turns: params.max_tool_turns,
            request_timeout_seconds: params.request_timeout.map(|d| d.as_secs()),
            max_tool_result_bytes: params.max_tool_result_bytes,
        }
    }
}

impl FileAgentConfig {
    pub fn to_execution_params(&self) -> ExecutionParams {
        ExecutionParams::default()
            .with_max_tool_turns(self.max_tool_turns)
            .with_request_timeout(self.request_timeout_seconds.map(Duration::from_secs))
            .with_max_tool_result_bytes(self.max_tool_result_bytes)
    }
}
