//! Progress notification port
//!
//! Callbacks fired while a question is being answered. Implementations live
//! in the presentation layer (spinners, console notices).

use wikibot_domain::StopReason;

/// Callback for progress updates during question answering.
///
/// Every method has a no-op default so implementations only override what
/// they display.
pub trait AskProgressNotifier: Send + Sync {
    /// Called right before a model request is sent (rounds start at 1).
    fn on_model_request(&self, _round: usize) {}

    /// Called when the model answered.
    fn on_model_response(&self, _round: usize, _stop_reason: &StopReason) {}

    /// Called when the model asked for a tool.
    fn on_tool_requested(&self, _tool_name: &str, _args_preview: &str) {}

    /// Called when a tool finished successfully.
    fn on_tool_completed(&self, _tool_name: &str, _duration_ms: u64, _bytes: usize) {}

    /// Called when a tool failed; the failure is handed back to the model.
    fn on_tool_failed(&self, _tool_name: &str, _error: &str) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl AskProgressNotifier for NoProgress {}
