//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Answer text with a header
    Text,
    /// Answer, transcript and counters as JSON
    Json,
}

/// CLI arguments for wikibot
#[derive(Parser, Debug)]
#[command(name = "wikibot")]
#[command(author, version, about = "Answer questions with an LLM that can look up Wikipedia")]
#[command(long_about = r#"
wikibot asks a Bedrock-hosted model your question. When the answer needs data
the model was not trained on, the model looks up a Wikipedia article with the
get_article tool and answers from it.

Without a question argument wikibot starts an interactive session.
Type quit, exit or q (or press Ctrl-D) to leave.

Configuration files are loaded from (in priority order):
1. WIKIBOT_* environment variables (WIKIBOT_AGENT__MAX_TOOL_TURNS=3)
2. --config <path>     Explicit config file
3. ./wikibot.toml      Project-level config
4. ~/.config/wikibot/config.toml   Global config

Example:
  wikibot "Who won the 2024 Tour de France?"
  wikibot -m claude-sonnet-4 --region us-west-2
  wikibot -o json "What is 2+2?"
"#)]
pub struct Cli {
    /// Question to answer (starts an interactive session when omitted)
    pub question: Option<String>,

    /// Model alias or raw Bedrock model id
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// AWS region for Bedrock
    #[arg(long, value_name = "REGION")]
    pub region: Option<String>,

    /// AWS shared config profile
    #[arg(long, value_name = "PROFILE")]
    pub profile: Option<String>,

    /// Maximum tool rounds per question
    #[arg(long, value_name = "N")]
    pub max_tool_turns: Option<usize>,

    /// Model request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Write diagnostic logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Append the conversation as JSON lines to this file
    #[arg(long, value_name = "PATH")]
    pub conversation_log: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
