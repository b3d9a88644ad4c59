//! Interactive chat module
//!
//! Provides a readline-based interactive session for asking questions.

mod repl;

pub use repl::{ChatRepl, ReplInput, parse_input};
