//! Prompt templates
//!
//! - [`SystemPrompt`]: the fixed system instruction for question answering

mod system;

pub use system::SystemPrompt;
