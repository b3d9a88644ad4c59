//! Conversation messages

use super::response::{ContentBlock, ToolResultStatus};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A message in a conversation (Entity)
///
/// Construction checks the block/role pairing: tool invocation requests
/// only come from the assistant, tool results only from the user, and a
/// message always carries at least one block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    role: Role,
    content: Vec<ContentBlock>,
}

impl Message {
    pub fn new(role: Role, content: Vec<ContentBlock>) -> Result<Self, DomainError> {
        if content.is_empty() {
            return Err(DomainError::InvalidMessage(format!(
                "{} message has no content",
                role
            )));
        }

        for block in &content {
            match (role, block) {
                (Role::User, ContentBlock::ToolUse { .. }) => {
                    return Err(DomainError::InvalidMessage(
                        "tool use blocks are only allowed in assistant messages".to_string(),
                    ));
                }
                (Role::Assistant, ContentBlock::ToolResult { .. }) => {
                    return Err(DomainError::InvalidMessage(
                        "tool result blocks are only allowed in user messages".to_string(),
                    ));
                }
                _ => {}
            }
        }

        Ok(Self { role, content })
    }

    /// A user message with a single text block.
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: vec![ContentBlock::Text(text.into())],
        }
    }

    /// A user message answering one tool invocation.
    pub fn tool_result(
        tool_use_id: impl Into<String>,
        output: impl Into<String>,
        status: ToolResultStatus,
    ) -> Self {
        Self {
            role: Role::User,
            content: vec![ContentBlock::ToolResult {
                tool_use_id: tool_use_id.into(),
                content: output.into(),
                status,
            }],
        }
    }

    /// An assistant message, as returned by the model.
    pub fn assistant(content: Vec<ContentBlock>) -> Result<Self, DomainError> {
        Self::new(Role::Assistant, content)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &[ContentBlock] {
        &self.content
    }

    /// Concatenated text of all `Text` blocks.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(|b| b.as_text())
            .collect::<Vec<_>>()
            .join("")
    }

    /// IDs of the tool invocation requests in this message.
    pub fn tool_use_ids(&self) -> impl Iterator<Item = &str> {
        self.content
            .iter()
            .filter_map(|b| b.as_tool_use().map(|(id, _, _)| id))
    }

    /// IDs answered by the tool result blocks in this message.
    pub fn tool_result_ids(&self) -> impl Iterator<Item = &str> {
        self.content
            .iter()
            .filter_map(|b| b.as_tool_result().map(|(id, _, _)| id))
    }
}
