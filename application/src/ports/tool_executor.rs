//! Tool Executor port
//!
//! Defines the interface for executing tools requested by the model.

use async_trait::async_trait;
use wikibot_domain::tool::{
    entities::{ToolCall, ToolDefinition, ToolSpec},
    value_objects::ToolResult,
};

/// Port for tool execution
///
/// This port defines how the application layer executes tools.
/// Implementations (adapters) live in the infrastructure layer.
///
/// `execute` never fails: unknown tools, bad arguments and lookup failures
/// come back as a failed [`ToolResult`] so the conversation can continue.
#[async_trait]
pub trait ToolExecutorPort: Send + Sync {
    /// Get the specification of all available tools
    fn tool_spec(&self) -> &ToolSpec;

    /// Check if a tool is available
    fn has_tool(&self, name: &str) -> bool {
        self.tool_spec().get(name).is_some()
    }

    /// Get the definition of a specific tool
    fn get_tool(&self, name: &str) -> Option<&ToolDefinition> {
        self.tool_spec().get(name)
    }

    /// Get names of all available tools, sorted
    fn available_tools(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tool_spec().names().collect();
        names.sort_unstable();
        names
    }

    /// Execute a tool call
    async fn execute(&self, call: &ToolCall) -> ToolResult;
}
