//! REPL (Read-Eval-Print Loop) for interactive question answering

use crate::cli::commands::OutputFormat;
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::{ProgressReporter, SimpleProgress};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::ops::ControlFlow;
use std::path::PathBuf;
use tracing::debug;
use wikibot_application::{
    AnswerOutput, AnswerQuestionError, AnswerQuestionInput, AnswerQuestionUseCase,
    AskProgressNotifier, ExecutionParams, InferenceParams, NoProgress,
};
use wikibot_domain::{Model, Question};

const PROMPT: &str = "Enter a question: ";

const QUIT_COMMANDS: [&str; 3] = ["quit", "exit", "q"];

/// One line read from the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplInput {
    /// End the session
    Quit,
    /// Nothing to do
    Empty,
    /// A question to answer
    Question(Question),
}

/// Classify a prompt line.
///
/// Quit commands are matched case-insensitively after trimming; anything
/// else that is not blank is a question, kept as typed.
pub fn parse_input(line: &str) -> ReplInput {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ReplInput::Empty;
    }
    if QUIT_COMMANDS
        .iter()
        .any(|cmd| trimmed.eq_ignore_ascii_case(cmd))
    {
        return ReplInput::Quit;
    }
    match Question::try_new(line) {
        Ok(question) => ReplInput::Question(question),
        Err(_) => ReplInput::Empty,
    }
}

/// Interactive question-answering REPL
pub struct ChatRepl {
    use_case: AnswerQuestionUseCase,
    model: Model,
    execution: ExecutionParams,
    inference: InferenceParams,
    show_progress: bool,
    output: OutputFormat,
    history_file: Option<PathBuf>,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(use_case: AnswerQuestionUseCase, model: Model) -> Self {
        Self {
            use_case,
            model,
            execution: ExecutionParams::default(),
            inference: InferenceParams::default(),
            show_progress: true,
            output: OutputFormat::Text,
            history_file: None,
        }
    }

    pub fn with_execution(mut self, execution: ExecutionParams) -> Self {
        self.execution = execution;
        self
    }

    pub fn with_inference(mut self, inference: InferenceParams) -> Self {
        self.inference = inference;
        self
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Persist line history to this file
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_file = path;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        println!("{}", ConsoleFormatter::welcome(&self.model));

        loop {
            match rl.readline(PROMPT) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = rl.add_history_entry(line.as_str());
                    }
                    if self.handle_line(&line).await.is_break() {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("{}", ConsoleFormatter::goodbye());
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = self.history_file {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    /// Process one prompt line. Returns `Break` when the session should end.
    pub async fn handle_line(&self, line: &str) -> ControlFlow<()> {
        match parse_input(line) {
            ReplInput::Quit => {
                println!("{}", ConsoleFormatter::goodbye());
                ControlFlow::Break(())
            }
            ReplInput::Empty => ControlFlow::Continue(()),
            ReplInput::Question(question) => {
                self.process_question(question).await;
                ControlFlow::Continue(())
            }
        }
    }

    async fn process_question(&self, question: Question) {
        println!();

        let input = AnswerQuestionInput::new(question, self.model.clone())
            .with_execution(self.execution.clone())
            .with_inference(self.inference.clone());

        let result = if self.show_progress && self.output == OutputFormat::Text {
            let progress = ProgressReporter::new();
            self.answer(input, &progress).await
        } else if self.output == OutputFormat::Text {
            self.answer(input, &SimpleProgress).await
        } else {
            self.answer(input, &NoProgress).await
        };

        match result {
            Ok(output) => match self.output {
                OutputFormat::Text => println!("{}", ConsoleFormatter::format_answer(&output)),
                OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&output)),
            },
            Err(e) => {
                eprintln!("{}", ConsoleFormatter::format_error(&e));
            }
        }
        println!();
    }

    async fn answer(
        &self,
        input: AnswerQuestionInput,
        progress: &dyn AskProgressNotifier,
    ) -> Result<AnswerOutput, AnswerQuestionError> {
        let result = self.use_case.execute(input, progress).await;
        if let Ok(ref output) = result {
            debug!(
                rounds = output.model_rounds,
                tools = output.tool_invocations,
                "Question answered"
            );
        }
        result
    }
}
