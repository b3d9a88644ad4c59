//! Tool domain module
//!
//! Defines how the model reaches outside its own knowledge. Every tool is
//! described by a [`ToolDefinition`] (name, description, parameters), invoked
//! through a [`ToolCall`] and answered with a [`ToolResult`].
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ ToolSpec     │───▶│ ToolCall     │───▶│ ToolResult   │
//! │ (declared)   │    │ (invocation) │    │ (output)     │
//! └──────────────┘    └──────────────┘    └──────────────┘
//! ```
//!
//! # Architecture
//!
//! - **Domain** (this module): pure definitions, no I/O
//! - **Application** (`ToolExecutorPort`): port trait for tool execution
//! - **Infrastructure** (`ToolRegistry`): name → handler table with
//!   the Wikipedia-backed `get_article` handler

pub mod entities;
pub mod traits;
pub mod value_objects;

/// Name of the article lookup tool, shared by its handler and the console
pub const GET_ARTICLE: &str = "get_article";

pub use entities::{ToolCall, ToolDefinition, ToolParameter, ToolSpec};
pub use traits::{DefaultToolValidator, ToolValidator};
pub use value_objects::{ToolError, ToolResult, ToolResultMetadata};
