//! Progress reporting while a question is answered

use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;
use wikibot_application::AskProgressNotifier;
use wikibot_domain::StopReason;
use wikibot_domain::tool::GET_ARTICLE;

/// Line printed when the model asks for a tool
fn tool_notice(tool_name: &str, args_preview: &str) -> String {
    if tool_name == GET_ARTICLE {
        ConsoleFormatter::lookup_notice(args_preview)
    } else {
        format!("{} {}: {}", "Calling".yellow(), tool_name, args_preview)
    }
}

/// Reports progress with a spinner while the model is working
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn start_spinner(&self, message: String) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(message);
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock()
            && let Some(old) = slot.replace(pb)
        {
            old.finish_and_clear();
        }
    }

    fn clear_spinner(&self) {
        if let Ok(mut slot) = self.spinner.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_and_clear();
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        self.clear_spinner();
    }
}

impl AskProgressNotifier for ProgressReporter {
    fn on_model_request(&self, round: usize) {
        let message = if round == 1 {
            "Thinking...".to_string()
        } else {
            format!("Thinking... (round {})", round)
        };
        self.start_spinner(message);
    }

    fn on_model_response(&self, _round: usize, _stop_reason: &StopReason) {
        self.clear_spinner();
    }

    fn on_tool_requested(&self, tool_name: &str, args_preview: &str) {
        println!("{}", tool_notice(tool_name, args_preview));
        self.start_spinner(format!("Running {}...", tool_name));
    }

    fn on_tool_completed(&self, _tool_name: &str, duration_ms: u64, bytes: usize) {
        self.clear_spinner();
        println!(
            "  {} {} bytes in {}ms",
            "v".green(),
            bytes,
            duration_ms
        );
    }

    fn on_tool_failed(&self, _tool_name: &str, error: &str) {
        self.clear_spinner();
        println!("  {} {}", "x".red(), error);
    }
}

/// Simple text-based progress (no spinner)
pub struct SimpleProgress;

impl AskProgressNotifier for SimpleProgress {
    fn on_tool_requested(&self, tool_name: &str, args_preview: &str) {
        println!("{}", tool_notice(tool_name, args_preview));
    }

    fn on_tool_failed(&self, tool_name: &str, error: &str) {
        println!("  {} {} failed: {}", "x".red(), tool_name, error);
    }
}
