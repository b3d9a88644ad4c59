//! State of the tool-use loop for a single question.

use crate::session::response::LlmResponse;
use crate::tool::entities::ToolCall;

/// Two-state machine driven by the model's stop reason.
///
/// ```text
///              ┌──────────────── tool result appended ───────────────┐
///              ▼                                                      │
///   ┌──────────────────┐  stop_reason = tool_use   ┌──────────────────┴─┐
///   │  AwaitingModel   │ ─────────────────────────▶│  ToolRequested     │
///   └────────┬─────────┘                           └────────────────────┘
///            │ any other stop reason
///            ▼
///         finished
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum LoopState {
    /// The transcript is ready to be sent to the model.
    AwaitingModel,
    /// The model asked for this call; its result must be appended next.
    ToolRequested(ToolCall),
}

impl LoopState {
    /// State after the model produced `response`, or `None` when the turn is over.
    ///
    /// Only a `tool_use` stop reason that actually carries a tool use block
    /// keeps the loop going. When several blocks are present the last one is
    /// dispatched.
    pub fn after_response(response: &LlmResponse) -> Option<LoopState> {
        if !response.stop_reason.is_tool_use() {
            return None;
        }
        response.last_tool_call().map(LoopState::ToolRequested)
    }

    pub fn is_tool_requested(&self) -> bool {
        matches!(self, LoopState::ToolRequested(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::response::{ContentBlock, StopReason};
    use std::collections::HashMap;

    fn tool_use_response(stop_reason: StopReason) -> LlmResponse {
        LlmResponse {
            content: vec![ContentBlock::ToolUse {
                id: "t1".to_string(),
                name: "get_article".to_string(),
                input: HashMap::new(),
            }],
            stop_reason,
            model: None,
        }
    }

    #[test]
    fn end_turn_finishes() {
        assert_eq!(LoopState::after_response(&LlmResponse::from_text("4")), None);
    }

    #[test]
    fn tool_use_requests_tool() {
        let state = LoopState::after_response(&tool_use_response(StopReason::ToolUse)).unwrap();
        assert!(state.is_tool_requested());
        match state {
            LoopState::ToolRequested(call) => {
                assert_eq!(call.tool_name, "get_article");
                assert_eq!(call.native_id.as_deref(), Some("t1"));
            }
            LoopState::AwaitingModel => panic!("expected ToolRequested"),
        }
    }

    #[test]
    fn tool_block_without_tool_use_stop_reason_finishes() {
        assert_eq!(
            LoopState::after_response(&tool_use_response(StopReason::MaxTokens)),
            None
        );
    }

    #[test]
    fn tool_use_stop_reason_without_block_finishes() {
        let response = LlmResponse {
            content: vec![ContentBlock::Text("hmm".to_string())],
            stop_reason: StopReason::ToolUse,
            model: None,
        };
        assert_eq!(LoopState::after_response(&response), None);
    }
}
