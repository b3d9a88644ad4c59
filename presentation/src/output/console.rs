//! Console output formatter for answers

use colored::Colorize;
use wikibot_application::{AnswerOutput, AnswerQuestionError};
use wikibot_domain::Model;

/// Formats answers and session messages for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the final answer with its header
    pub fn format_answer(output: &AnswerOutput) -> String {
        format!("{}\n{}\n", "Final answer:".cyan().bold(), output.answer)
    }

    /// Format the answer, transcript and counters as JSON
    pub fn format_json(output: &AnswerOutput) -> String {
        serde_json::to_string_pretty(output).unwrap_or_else(|_| "{}".to_string())
    }

    /// Footer line with the run statistics
    pub fn format_stats(output: &AnswerOutput) -> String {
        format!(
            "{} {} model request(s), {} tool call(s)",
            "--".dimmed(),
            output.model_rounds,
            output.tool_invocations
        )
        .dimmed()
        .to_string()
    }

    /// Format a question-level error
    pub fn format_error(error: &AnswerQuestionError) -> String {
        format!("{} {}", "Error:".red().bold(), error)
    }

    /// Announcement printed before each article lookup
    pub fn lookup_notice(term: &str) -> String {
        format!("{} {}", "Looking up article for:".yellow(), term)
    }

    /// Greeting banner for the interactive session
    pub fn welcome(model: &Model) -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str(&Self::header("wikibot"));
        output.push_str("\n\n");
        output.push_str(&format!("{} {}\n", "Model:".cyan().bold(), model));
        output.push_str(
            "Ask me anything. I look up Wikipedia when I need recent information.\n",
        );
        output.push_str(&format!(
            "Type {} (or {} / {}) to leave.\n",
            "quit".bold(),
            "exit".bold(),
            "q".bold()
        ));
        output
    }

    pub fn goodbye() -> &'static str {
        "Goodbye!"
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(48);
        format!("{}\n{:^48}\n{}", line.cyan(), title.bold(), line.cyan())
    }
}
