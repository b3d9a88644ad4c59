//! Tool Registry
//!
//! The [`ToolRegistry`] maps tool names to their declaration and handler and
//! implements [`ToolExecutorPort`]. Calls are validated against the
//! declaration before the handler runs.
//!
//! # Usage
//!
//! ```ignore
//! use wikibot_infrastructure::tools::{ArticleTool, ToolRegistry};
//!
//! let registry = ToolRegistry::new().register(ArticleTool::new(corpus));
//! assert!(registry.has_tool("get_article"));
//!
//! let call = ToolCall::new("get_article").with_arg("search_term", "Rust");
//! let result = registry.execute(&call).await;
//! ```

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use tracing::debug;
use wikibot_application::ports::tool_executor::ToolExecutorPort;
use wikibot_domain::tool::{
    entities::{ToolCall, ToolDefinition, ToolSpec},
    traits::{DefaultToolValidator, ToolValidator},
    value_objects::{ToolError, ToolResult},
};

/// A single tool: its declaration and the code that runs it.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Declaration advertised to the model.
    fn definition(&self) -> ToolDefinition;

    /// Run the tool. Failures are returned as failed results.
    async fn handle(&self, call: &ToolCall) -> ToolResult;
}

/// Name → (declaration, handler) table.
pub struct ToolRegistry {
    tool_spec: ToolSpec,
    handlers: HashMap<String, Arc<dyn ToolHandler>>,
    validator: DefaultToolValidator,
}

impl ToolRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            tool_spec: ToolSpec::new(),
            handlers: HashMap::new(),
            validator: DefaultToolValidator,
        }
    }

    /// Register a tool handler. A later registration replaces an earlier one
    /// with the same name.
    pub fn register<H: ToolHandler + 'static>(self, handler: H) -> Self {
        self.register_arc(Arc::new(handler))
    }

    /// Register a tool handler (Arc version)
    pub fn register_arc(mut self, handler: Arc<dyn ToolHandler>) -> Self {
        let definition = handler.definition();
        debug!(tool = %definition.name, "Registered tool");
        self.handlers.insert(definition.name.clone(), handler);
        self.tool_spec = self.tool_spec.register(definition);
        self
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToolExecutorPort for ToolRegistry {
    fn tool_spec(&self) -> &ToolSpec {
        &self.tool_spec
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        let (Some(definition), Some(handler)) = (
            self.tool_spec.get(&call.tool_name),
            self.handlers.get(&call.tool_name),
        ) else {
            return ToolResult::failure(&call.tool_name, ToolError::unknown_tool(&call.tool_name));
        };

        if let Err(e) = self.validator.validate(call, definition) {
            return ToolResult::failure(&call.tool_name, ToolError::invalid_argument(e));
        }

        let start = Instant::now();
        let result = handler.handle(call).await;
        if result.metadata.duration_ms.is_some() {
            result
        } else {
            result.with_duration(start.elapsed().as_millis() as u64)
        }
    }
}
