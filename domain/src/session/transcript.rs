//! Transcript entity: the message history for one question.

use super::message::{Message, Role};
use crate::core::error::DomainError;
use crate::core::question::Question;
use serde::Serialize;

/// Ordered, append-only message history exchanged with the model.
///
/// The transcript always starts with the user's question and strictly
/// alternates roles afterwards. Every tool result must answer a tool
/// invocation request of the assistant message directly before it.
///
/// Requests left unanswered are not rejected: when one reply holds several
/// tool invocations only the last one is run and answered. The Converse API
/// refuses such a history on the next request, so a multi-tool reply ends
/// the question with a service error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// Start a transcript with the user's question as a single text block.
    pub fn new(question: &Question) -> Self {
        Self {
            messages: vec![Message::user_text(question.content())],
        }
    }

    /// Append a message, enforcing role alternation and id correlation.
    pub fn push(&mut self, message: Message) -> Result<(), DomainError> {
        let last = self.messages.last().ok_or_else(|| {
            DomainError::InvalidMessage("transcript has no opening message".to_string())
        })?;

        if last.role() == message.role() {
            return Err(DomainError::InvalidMessage(format!(
                "two consecutive {} messages",
                message.role()
            )));
        }

        if message.role() == Role::User {
            let requested: Vec<&str> = last.tool_use_ids().collect();
            for id in message.tool_result_ids() {
                if !requested.contains(&id) {
                    return Err(DomainError::InvalidMessage(format!(
                        "tool result '{}' does not answer a preceding tool use",
                        id
                    )));
                }
            }
        }

        self.messages.push(message);
        Ok(())
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The most recent assistant message, if any.
    pub fn last_assistant(&self) -> Option<&Message> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role() == Role::Assistant)
    }

    /// Number of tool invocation requests made by the assistant so far.
    pub fn tool_use_count(&self) -> usize {
        self.messages
            .iter()
            .map(|m| m.tool_use_ids().count())
            .sum()
    }
}
