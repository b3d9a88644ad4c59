//! Execution parameters for the tool loop.
//!
//! [`ExecutionParams`] groups the static parameters that control the
//! conversation loop in
//! [`AnswerQuestionUseCase`](crate::use_cases::answer_question::AnswerQuestionUseCase).
//! These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tool loop control parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionParams {
    /// Maximum tool rounds for a single question before giving up.
    pub max_tool_turns: usize,
    /// Timeout for each model request. `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
    /// Cap (in bytes) on tool output handed back to the model. `None` sends
    /// the article verbatim.
    pub max_tool_result_bytes: Option<usize>,
}

impl Default for ExecutionParams {
    fn default() -> Self {
        Self {
            max_tool_turns: 10,
            request_timeout: Some(Duration::from_secs(120)),
            max_tool_result_bytes: None,
        }
    }
}

impl ExecutionParams {
    // ==================== Builder Methods ====================

    pub fn with_max_tool_turns(mut self, max: usize) -> Self {
        self.max_tool_turns = max;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_max_tool_result_bytes(mut self, max: Option<usize>) -> Self {
        self.max_tool_result_bytes = max;
        self
    }
}
