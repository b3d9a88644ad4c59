//! Presentation layer for wikibot
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive question prompt.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{ChatRepl, ReplInput, parse_input};
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
