//! LLM response types for native tool use.
//!
//! A model reply is a list of [`ContentBlock`]s plus a [`StopReason`]. When the
//! stop reason is [`StopReason::ToolUse`] the caller must run the requested
//! tool and answer with a [`ContentBlock::ToolResult`] carrying the same id.
//!
//! ```text
//! assistant: [Text?, ToolUse { id, name, input }]   stop_reason = ToolUse
//! user:      [ToolResult { tool_use_id = id, .. }]
//! assistant: [Text]                                  stop_reason = EndTurn
//! ```

use crate::tool::entities::ToolCall;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Outcome flag carried by a tool result block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolResultStatus {
    Success,
    Error,
}

/// A single block of content within a message.
///
/// # Examples
///
/// ```
/// use wikibot_domain::session::response::ContentBlock;
///
/// let text = ContentBlock::Text("Let me look that up.".to_string());
/// assert!(text.as_text().is_some());
///
/// let tool = ContentBlock::ToolUse {
///     id: "tooluse_abc123".to_string(),
///     name: "get_article".to_string(),
///     input: [("search_term".to_string(), serde_json::json!("Rust"))]
///         .into_iter().collect(),
/// };
/// assert!(tool.as_tool_use().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentBlock {
    /// Plain natural-language content.
    Text(String),

    /// A tool invocation request from the model (assistant messages only).
    ToolUse {
        /// Service-assigned ID for correlating with the tool result.
        id: String,
        /// Name of the declared tool the model wants to call.
        name: String,
        /// Structured arguments, expected to follow the tool's input schema.
        input: HashMap<String, serde_json::Value>,
    },

    /// The answer to an earlier tool invocation (user messages only).
    ToolResult {
        /// Must equal the `id` of the matching [`ContentBlock::ToolUse`].
        tool_use_id: String,
        /// Tool output, or a failure description.
        content: String,
        status: ToolResultStatus,
    },
}

impl ContentBlock {
    /// Returns the text content if this is a `Text` block.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentBlock::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns `(id, name, input)` if this is a `ToolUse` block.
    pub fn as_tool_use(&self) -> Option<(&str, &str, &HashMap<String, serde_json::Value>)> {
        match self {
            ContentBlock::ToolUse { id, name, input } => Some((id, name, input)),
            _ => None,
        }
    }

    /// Returns `(tool_use_id, content, status)` if this is a `ToolResult` block.
    pub fn as_tool_result(&self) -> Option<(&str, &str, ToolResultStatus)> {
        match self {
            ContentBlock::ToolResult {
                tool_use_id,
                content,
                status,
            } => Some((tool_use_id, content, *status)),
            _ => None,
        }
    }
}

/// Reason the model stopped generating.
///
/// Only [`StopReason::ToolUse`] keeps the tool loop running; every other
/// reason ends the turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Natural end of response; the model is done.
    EndTurn,
    /// The model wants to call a tool.
    ToolUse,
    /// Hit the token limit; the response may be truncated.
    MaxTokens,
    /// Provider-specific stop reason.
    Other(String),
}

impl StopReason {
    pub fn is_tool_use(&self) -> bool {
        matches!(self, StopReason::ToolUse)
    }
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StopReason::EndTurn => write!(f, "end_turn"),
            StopReason::ToolUse => write!(f, "tool_use"),
            StopReason::MaxTokens => write!(f, "max_tokens"),
            StopReason::Other(s) => write!(f, "{}", s),
        }
    }
}

/// A structured response from an LLM, supporting both text and tool use.
///
/// # Examples
///
/// ```
/// use wikibot_domain::session::response::{LlmResponse, ContentBlock, StopReason};
///
/// let response = LlmResponse::from_text("4");
/// assert_eq!(response.text_content(), "4");
/// assert!(!response.has_tool_calls());
///
/// let response = LlmResponse {
///     content: vec![
///         ContentBlock::Text("Checking Wikipedia...".to_string()),
///         ContentBlock::ToolUse {
///             id: "tooluse_1".to_string(),
///             name: "get_article".to_string(),
///             input: [("search_term".to_string(), serde_json::json!("Rust"))]
///                 .into_iter().collect(),
///         },
///     ],
///     stop_reason: StopReason::ToolUse,
///     model: None,
/// };
/// assert_eq!(response.last_tool_call().unwrap().tool_name, "get_article");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LlmResponse {
    /// Content blocks in the response (text and/or tool use).
    pub content: Vec<ContentBlock>,
    /// Why the model stopped generating.
    pub stop_reason: StopReason,
    /// Model identifier (if returned by the API).
    pub model: Option<String>,
}

impl LlmResponse {
    /// Create a text-only response that ends the turn.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentBlock::Text(text.into())],
            stop_reason: StopReason::EndTurn,
            model: None,
        }
    }

    /// Concatenate all `Text` content blocks into a single string.
    pub fn text_content(&self) -> String {
        self.content
            .iter()
            .filter_map(|b| b.as_text())
            .collect::<Vec<_>>()
            .join("")
    }

    /// Extract all `ToolUse` content blocks as `Vec<ToolCall>`.
    pub fn tool_calls(&self) -> Vec<ToolCall> {
        self.content
            .iter()
            .filter_map(|b| match b {
                ContentBlock::ToolUse { id, name, input } => {
                    Some(ToolCall::from_native(id, name, input.clone()))
                }
                _ => None,
            })
            .collect()
    }

    /// The last `ToolUse` block of the response, which is the one dispatched.
    pub fn last_tool_call(&self) -> Option<ToolCall> {
        self.content.iter().rev().find_map(|b| match b {
            ContentBlock::ToolUse { id, name, input } => {
                Some(ToolCall::from_native(id, name, input.clone()))
            }
            _ => None,
        })
    }

    /// Returns `true` if the response contains any tool use requests.
    pub fn has_tool_calls(&self) -> bool {
        self.content
            .iter()
            .any(|b| matches!(b, ContentBlock::ToolUse { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool_use(id: &str, term: &str) -> ContentBlock {
        ContentBlock::ToolUse {
            id: id.to_string(),
            name: "get_article".to_string(),
            input: [("search_term".to_string(), serde_json::json!(term))]
                .into_iter()
                .collect(),
        }
    }

    #[test]
    fn from_text_creates_text_only_response() {
        let response = LlmResponse::from_text("Hello, world!");
        assert_eq!(response.text_content(), "Hello, world!");
        assert!(!response.has_tool_calls());
        assert!(response.tool_calls().is_empty());
        assert!(response.last_tool_call().is_none());
        assert_eq!(response.stop_reason, StopReason::EndTurn);
    }

    #[test]
    fn tool_calls_extraction() {
        let response = LlmResponse {
            content: vec![
                ContentBlock::Text("Let me check.".to_string()),
                tool_use("tooluse_a", "Rust"),
                ContentBlock::Text(" And one more.".to_string()),
                tool_use("tooluse_b", "Ferris"),
            ],
            stop_reason: StopReason::ToolUse,
            model: Some("anthropic.claude-3-5-sonnet-20241022-v2:0".to_string()),
        };

        assert!(response.has_tool_calls());
        assert_eq!(response.text_content(), "Let me check. And one more.");

        let calls = response.tool_calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].native_id.as_deref(), Some("tooluse_a"));
        assert_eq!(calls[0].get_string("search_term"), Some("Rust"));

        let last = response.last_tool_call().unwrap();
        assert_eq!(last.native_id.as_deref(), Some("tooluse_b"));
        assert_eq!(last.get_string("search_term"), Some("Ferris"));
    }

    #[test]
    fn empty_response() {
        let response = LlmResponse {
            content: vec![],
            stop_reason: StopReason::EndTurn,
            model: None,
        };

        assert_eq!(response.text_content(), "");
        assert!(!response.has_tool_calls());
    }

    #[test]
    fn content_block_accessors() {
        let text = ContentBlock::Text("hello".to_string());
        assert_eq!(text.as_text(), Some("hello"));
        assert!(text.as_tool_use().is_none());
        assert!(text.as_tool_result().is_none());

        let result = ContentBlock::ToolResult {
            tool_use_id: "id1".to_string(),
            content: "article".to_string(),
            status: ToolResultStatus::Success,
        };
        let (id, content, status) = result.as_tool_result().unwrap();
        assert_eq!(id, "id1");
        assert_eq!(content, "article");
        assert_eq!(status, ToolResultStatus::Success);
    }

    #[test]
    fn content_block_serializes_externally_tagged() {
        let json = serde_json::to_value(ContentBlock::Text("hi".to_string())).unwrap();
        assert_eq!(json, serde_json::json!({ "text": "hi" }));

        let json = serde_json::to_value(tool_use("t1", "Rust")).unwrap();
        assert_eq!(json["tool_use"]["id"], "t1");
        assert_eq!(json["tool_use"]["input"]["search_term"], "Rust");
    }

    #[test]
    fn stop_reason_display_and_predicate() {
        assert_eq!(StopReason::EndTurn.to_string(), "end_turn");
        assert_eq!(StopReason::ToolUse.to_string(), "tool_use");
        assert!(StopReason::ToolUse.is_tool_use());
        assert!(!StopReason::MaxTokens.is_tool_use());
        assert!(!StopReason::Other("content_filtered".to_string()).is_tool_use());
    }
}
