//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod answer_question;
pub(crate) mod tool_helpers;
