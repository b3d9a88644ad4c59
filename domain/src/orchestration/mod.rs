//! Orchestration of a single question.
//!
//! - [`loop_state::LoopState`]: awaiting-model / tool-requested state machine

pub mod loop_state;
