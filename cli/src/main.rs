//! CLI entrypoint for wikibot
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use wikibot_application::{
    AnswerQuestionInput, AnswerQuestionUseCase, AskProgressNotifier, NoProgress,
};
use wikibot_domain::Question;
use wikibot_infrastructure::{
    BedrockLlmGateway, ConfigLoader, FileConfig, JsonSchemaToolConverter,
    JsonlConversationLogger, WikipediaClient, default_registry,
};
use wikibot_presentation::{
    ChatRepl, Cli, ConsoleFormatter, OutputFormat, ProgressReporter, SimpleProgress,
};

/// Install the tracing subscriber. The returned guard flushes the log file
/// on drop and must live until the end of `main`.
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    match cli.log_file {
        Some(ref path) => {
            let file_name = path
                .file_name()
                .with_context(|| format!("Invalid log file path: {}", path.display()))?;
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| std::path::Path::new("."));

            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
            Ok(None)
        }
    }
}

/// CLI flags take priority over every configuration source.
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(ref model) = cli.model {
        config.bedrock.model = model.clone();
    }
    if let Some(ref region) = cli.region {
        config.bedrock.region = Some(region.clone());
    }
    if let Some(ref profile) = cli.profile {
        config.bedrock.profile = Some(profile.clone());
    }
    if let Some(turns) = cli.max_tool_turns {
        config.agent.max_tool_turns = turns;
    }
    if let Some(timeout) = cli.timeout {
        config.agent.request_timeout_seconds = Some(timeout);
    }
    if let Some(ref path) = cli.conversation_log {
        config.logging.conversation_log = Some(path.display().to_string());
    }
    if cli.quiet {
        config.repl.show_progress = false;
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let _log_guard = init_logging(&cli)?;

    info!("Starting wikibot");

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    apply_cli_overrides(&mut config, &cli);

    let issues = config.validate();
    if !issues.is_empty() {
        for issue in &issues {
            eprintln!("Config error: {}", issue);
        }
        bail!("Invalid configuration ({} problem(s))", issues.len());
    }

    let model = config.bedrock.parse_model()?;
    let execution = config.agent.to_execution_params();
    let inference = config.bedrock.inference_params();

    // === Dependency Injection ===
    let gateway = Arc::new(BedrockLlmGateway::new(&config.bedrock).await);
    let corpus = Arc::new(WikipediaClient::new(&config.wikipedia)?);
    let tools = Arc::new(default_registry(corpus));

    let mut use_case =
        AnswerQuestionUseCase::new(gateway, tools, Arc::new(JsonSchemaToolConverter));

    if let Some(ref path) = config.logging.conversation_log {
        match JsonlConversationLogger::new(path) {
            Some(logger) => {
                info!("Conversation log: {}", logger.path().display());
                use_case = use_case.with_conversation_logger(Arc::new(logger));
            }
            None => warn!("Conversation logging disabled"),
        }
    }

    // Interactive mode when no question is given
    let Some(question) = cli.question else {
        let repl = ChatRepl::new(use_case, model)
            .with_execution(execution)
            .with_inference(inference)
            .with_progress(config.repl.show_progress)
            .with_output(cli.output)
            .with_history_file(config.repl.history_file.as_ref().map(PathBuf::from));

        repl.run().await?;
        return Ok(());
    };

    // Single question mode
    let question = Question::try_new(question)?;
    let input = AnswerQuestionInput::new(question, model)
        .with_execution(execution)
        .with_inference(inference);

    let progress: Box<dyn AskProgressNotifier> = match cli.output {
        OutputFormat::Json => Box::new(NoProgress),
        OutputFormat::Text if config.repl.show_progress => Box::new(ProgressReporter::new()),
        OutputFormat::Text => Box::new(SimpleProgress),
    };

    let result = use_case.execute(input, progress.as_ref()).await;
    drop(progress);
    let output = result?;

    match cli.output {
        OutputFormat::Text => {
            println!("{}", ConsoleFormatter::format_answer(&output));
            if cli.verbose > 0 {
                println!("{}", ConsoleFormatter::format_stats(&output));
            }
        }
        OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&output)),
    }

    Ok(())
}
