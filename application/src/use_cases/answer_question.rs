//! Answer Question use case.
//!
//! Drives one question through the native tool-use loop: ask the model,
//! run the tool it requests, hand the result back, and repeat until the
//! model produces a final answer.
//!
//! Each question starts a fresh [`Transcript`]; nothing is carried over from
//! previous questions.

use crate::config::{ExecutionParams, InferenceParams};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{ConverseRequest, GatewayError, LlmGateway};
use crate::ports::progress::AskProgressNotifier;
use crate::ports::tool_executor::ToolExecutorPort;
use crate::ports::tool_schema::ToolSchemaPort;
use crate::use_cases::tool_helpers::{cap_tool_output, tool_args_preview};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};
use wikibot_domain::util::truncate_str;
use wikibot_domain::{
    DomainError, LlmResponse, LoopState, Message, Model, Question, SystemPrompt, ToolCall,
    ToolResultStatus, Transcript,
};

/// Errors that end a single question.
///
/// None of these are fatal to an interactive session: the caller reports the
/// error and moves on to the next question.
#[derive(Error, Debug)]
pub enum AnswerQuestionError {
    /// The model service could not be reached, refused, or timed out.
    #[error("Model service unavailable: {0}")]
    ServiceUnavailable(#[from] GatewayError),

    /// The model kept asking for tools past the round limit.
    #[error("Model did not finish within {max_rounds} tool rounds")]
    NonTermination { max_rounds: usize },

    /// The model ended its turn without any text.
    #[error("No answer from model")]
    EmptyResponse,

    /// The conversation broke a transcript invariant.
    #[error("Invalid conversation: {0}")]
    Protocol(#[from] DomainError),
}

/// Input for the [`AnswerQuestionUseCase`].
#[derive(Debug, Clone)]
pub struct AnswerQuestionInput {
    /// The user's question.
    pub question: Question,
    /// Model to converse with.
    pub model: Model,
    /// Loop control (round limit, timeouts).
    pub execution: ExecutionParams,
    /// Sampling parameters.
    pub inference: InferenceParams,
}

impl AnswerQuestionInput {
    pub fn new(question: Question, model: Model) -> Self {
        Self {
            question,
            model,
            execution: ExecutionParams::default(),
            inference: InferenceParams::default(),
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
}

/// Result of a successfully answered question.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerOutput {
    /// Text of the model's final message.
    pub answer: String,
    /// Full conversation for this question.
    pub transcript: Transcript,
    /// Number of tools executed.
    pub tool_invocations: usize,
    /// Number of model requests sent.
    pub model_rounds: usize,
}

/// Use case for answering one question.
///
/// Flow:
/// 1. Start a transcript with the question
/// 2. Send transcript + system prompt + tool declarations to the model
/// 3. If the model requests a tool, execute it and append the result
/// 4. Repeat from 2 until the model ends its turn
pub struct AnswerQuestionUseCase {
    gateway: Arc<dyn LlmGateway>,
    tool_executor: Arc<dyn ToolExecutorPort>,
    tool_schema: Arc<dyn ToolSchemaPort>,
    conversation_logger: Arc<dyn ConversationLogger>,
    system_prompt: String,
}

impl Clone for AnswerQuestionUseCase {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            tool_executor: self.tool_executor.clone(),
            tool_schema: self.tool_schema.clone(),
            conversation_logger: self.conversation_logger.clone(),
            system_prompt: self.system_prompt.clone(),
        }
    }
}

impl AnswerQuestionUseCase {
    pub fn new(
        gateway: Arc<dyn LlmGateway>,
        tool_executor: Arc<dyn ToolExecutorPort>,
        tool_schema: Arc<dyn ToolSchemaPort>,
    ) -> Self {
        let system_prompt =
            SystemPrompt::question_answering(&tool_executor.available_tools().join(", "));
        Self {
            gateway,
            tool_executor,
            tool_schema,
            conversation_logger: Arc::new(NoConversationLogger),
            system_prompt,
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Replace the system instruction.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Answer the question with progress callbacks.
    pub async fn execute(
        &self,
        input: AnswerQuestionInput,
        progress: &dyn AskProgressNotifier,
    ) -> Result<AnswerOutput, AnswerQuestionError> {
        info!(
            "Answering question: {}",
            truncate_str(input.question.content(), 100)
        );

        // Declarations are built once so every round sends the same set
        let tools = self
            .tool_schema
            .all_tools_schema(self.tool_executor.tool_spec());

        debug!(
            "Using model {}, {} tools available",
            input.model,
            tools.len()
        );

        self.conversation_logger.log(ConversationEvent::new(
            "question",
            serde_json::json!({
                "model": input.model.to_string(),
                "text": input.question.content(),
            }),
        ));

        let mut transcript = Transcript::new(&input.question);
        let max_rounds = input.execution.max_tool_turns;
        let mut model_rounds = 0;
        let mut tool_rounds = 0;
        let mut state = LoopState::AwaitingModel;

        loop {
            state = match state {
                LoopState::AwaitingModel => {
                    model_rounds += 1;
                    let response = self
                        .request_model(&input, &transcript, &tools, model_rounds, progress)
                        .await?;

                    if response.content.is_empty() {
                        return Err(AnswerQuestionError::EmptyResponse);
                    }

                    let next = LoopState::after_response(&response);
                    transcript.push(Message::assistant(response.content)?)?;

                    match next {
                        Some(next) => next,
                        None => break,
                    }
                }
                LoopState::ToolRequested(call) => {
                    tool_rounds += 1;
                    if tool_rounds > max_rounds {
                        warn!("Tool loop exceeded max_tool_turns ({})", max_rounds);
                        return Err(AnswerQuestionError::NonTermination { max_rounds });
                    }

                    debug!("Tool round {}/{}: {}", tool_rounds, max_rounds, call.tool_name);
                    let message = self.run_tool(&call, &input.execution, progress).await?;
                    transcript.push(message)?;
                    LoopState::AwaitingModel
                }
            };
        }

        let answer = transcript
            .last_assistant()
            .map(|m| m.text())
            .unwrap_or_default();
        if answer.is_empty() {
            return Err(AnswerQuestionError::EmptyResponse);
        }

        info!(
            "Answered in {} model rounds, {} tool calls",
            model_rounds, tool_rounds
        );

        self.conversation_logger.log(ConversationEvent::new(
            "answer",
            serde_json::json!({
                "model": input.model.to_string(),
                "rounds": model_rounds,
                "tool_calls": tool_rounds,
                "bytes": answer.len(),
                "text": answer,
            }),
        ));

        Ok(AnswerOutput {
            answer,
            transcript,
            tool_invocations: tool_rounds,
            model_rounds,
        })
    }

    /// Send the transcript to the model, honoring the request timeout.
    async fn request_model(
        &self,
        input: &AnswerQuestionInput,
        transcript: &Transcript,
        tools: &[serde_json::Value],
        round: usize,
        progress: &dyn AskProgressNotifier,
    ) -> Result<LlmResponse, AnswerQuestionError> {
        let request = ConverseRequest {
            model: &input.model,
            system_prompt: &self.system_prompt,
            messages: transcript.messages(),
            tools,
            inference: &input.inference,
        };

        progress.on_model_request(round);
        let call = self.gateway.converse(&request);
        let response = match input.execution.request_timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| GatewayError::Timeout)??,
            None => call.await?,
        };

        debug!(
            "Model round {} finished with stop reason {}",
            round, response.stop_reason
        );
        progress.on_model_response(round, &response.stop_reason);

        Ok(response)
    }

    /// Execute the requested tool and wrap its outcome as a tool-result
    /// message answering the request's id.
    async fn run_tool(
        &self,
        call: &ToolCall,
        execution: &ExecutionParams,
        progress: &dyn AskProgressNotifier,
    ) -> Result<Message, AnswerQuestionError> {
        let Some(tool_use_id) = call.native_id.clone() else {
            return Err(DomainError::InvalidMessage(format!(
                "tool call '{}' has no invocation id",
                call.tool_name
            ))
            .into());
        };

        let preview = tool_args_preview(call);
        progress.on_tool_requested(&call.tool_name, &preview);

        self.conversation_logger.log(ConversationEvent::new(
            "tool_call",
            serde_json::json!({
                "id": tool_use_id,
                "tool": call.tool_name,
                "arguments": call.arguments,
            }),
        ));

        let result = self.tool_executor.execute(call).await;

        let status = if result.is_success() {
            progress.on_tool_completed(
                &call.tool_name,
                result.metadata.duration_ms.unwrap_or(0),
                result.metadata.bytes.unwrap_or(0),
            );
            ToolResultStatus::Success
        } else {
            let error = result
                .error()
                .map(|e| e.to_string())
                .unwrap_or_else(|| "Unknown error".to_string());
            warn!("Tool '{}' failed: {}", call.tool_name, error);
            progress.on_tool_failed(&call.tool_name, &error);
            ToolResultStatus::Error
        };

        let mut text = result.to_model_text();
        if let Some(max_bytes) = execution.max_tool_result_bytes {
            text = cap_tool_output(text, max_bytes);
        }

        self.conversation_logger.log(ConversationEvent::new(
            "tool_result",
            serde_json::json!({
                "id": tool_use_id,
                "tool": call.tool_name,
                "success": result.is_success(),
                "bytes": text.len(),
            }),
        ));

        Ok(Message::tool_result(tool_use_id, text, status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use async_trait::async_trait;
    use std::collections::{HashMap, VecDeque};
    use std::sync::Mutex;
    use std::time::Duration;
    use wikibot_domain::session::response::{ContentBlock, StopReason};
    use wikibot_domain::tool::entities::{ToolDefinition, ToolParameter, ToolSpec};
    use wikibot_domain::{Role, ToolError, ToolResult};

    // ==================== Test Mocks ====================

    /// A request as seen by the gateway.
    #[derive(Debug, Clone)]
    struct RecordedRequest {
        system_prompt: String,
        messages: Vec<Message>,
        tools: Vec<serde_json::Value>,
        temperature: f32,
    }

    struct MockGateway {
        responses: Mutex<VecDeque<Result<LlmResponse, GatewayError>>>,
        repeat: Option<LlmResponse>,
        delay: Option<Duration>,
        requests: Mutex<Vec<RecordedRequest>>,
    }

    impl MockGateway {
        fn new(responses: Vec<LlmResponse>) -> Self {
            Self {
                responses: Mutex::new(responses.into_iter().map(Ok).collect()),
                repeat: None,
                delay: None,
                requests: Mutex::new(Vec::new()),
            }
        }

        fn failing(error: GatewayError) -> Self {
            Self {
                responses: Mutex::new(VecDeque::from([Err(error)])),
                repeat: None,
                delay: None,
                requests: Mutex::new(Vec::new()),
            }
        }

        /// Answers every request with the same response.
        fn repeating(response: LlmResponse) -> Self {
            Self {
                responses: Mutex::new(VecDeque::new()),
                repeat: Some(response),
                delay: None,
                requests: Mutex::new(Vec::new()),
            }
        }

        fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        fn requests(&self) -> Vec<RecordedRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LlmGateway for MockGateway {
        async fn converse(
            &self,
            request: &ConverseRequest<'_>,
        ) -> Result<LlmResponse, GatewayError> {
            self.requests.lock().unwrap().push(RecordedRequest {
                system_prompt: request.system_prompt.to_string(),
                messages: request.messages.to_vec(),
                tools: request.tools.to_vec(),
                temperature: request.inference.temperature,
            });

            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }

            if let Some(response) = &self.repeat {
                return Ok(response.clone());
            }

            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::Other("No more responses".to_string())))
        }
    }

    struct MockToolExecutor {
        spec: ToolSpec,
        result: ToolResult,
        calls: Mutex<Vec<ToolCall>>,
    }

    impl MockToolExecutor {
        fn returning(result: ToolResult) -> Self {
            Self {
                spec: ToolSpec::new().register(
                    ToolDefinition::new("get_article", "Retrieve an article").with_parameter(
                        ToolParameter::new("search_term", "Term to look up", true),
                    ),
                ),
                result,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<ToolCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ToolExecutorPort for MockToolExecutor {
        fn tool_spec(&self) -> &ToolSpec {
            &self.spec
        }

        async fn execute(&self, call: &ToolCall) -> ToolResult {
            self.calls.lock().unwrap().push(call.clone());
            self.result.clone()
        }
    }

    /// Minimal ToolSchemaPort that reproduces the JSON Schema conversion for tests.
    struct MockToolSchema;

    impl ToolSchemaPort for MockToolSchema {
        fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value {
            serde_json::json!({
                "name": tool.name,
                "description": tool.description,
                "input_schema": { "type": "object", "properties": {}, "required": [] }
            })
        }

        fn all_tools_schema(&self, spec: &ToolSpec) -> Vec<serde_json::Value> {
            let mut tools: Vec<_> = spec.all().collect();
            tools.sort_by(|a, b| a.name.cmp(&b.name));
            tools.into_iter().map(|t| self.tool_to_schema(t)).collect()
        }
    }

    fn tool_use_response(id: &str, term: &str) -> LlmResponse {
        let mut input = HashMap::new();
        input.insert("search_term".to_string(), serde_json::json!(term));
        LlmResponse {
            content: vec![ContentBlock::ToolUse {
                id: id.to_string(),
                name: "get_article".to_string(),
                input,
            }],
            stop_reason: StopReason::ToolUse,
            model: None,
        }
    }

    fn use_case(gateway: Arc<MockGateway>, executor: Arc<MockToolExecutor>) -> AnswerQuestionUseCase {
        AnswerQuestionUseCase::new(gateway, executor, Arc::new(MockToolSchema))
    }

    fn input(question: &str) -> AnswerQuestionInput {
        AnswerQuestionInput::new(Question::try_new(question).unwrap(), Model::default())
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_direct_answer_without_tools() {
        let gateway = Arc::new(MockGateway::new(vec![LlmResponse::from_text("4")]));
        let executor = Arc::new(MockToolExecutor::returning(ToolResult::success(
            "get_article",
            "unused",
        )));
        let uc = use_case(gateway.clone(), executor.clone());

        let output = uc.execute(input("What is 2+2?"), &NoProgress).await.unwrap();

        assert_eq!(output.answer, "4");
        assert_eq!(output.tool_invocations, 0);
        assert_eq!(output.model_rounds, 1);
        assert_eq!(output.transcript.len(), 2);
        assert!(executor.calls().is_empty());
        assert_eq!(gateway.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_single_tool_round() {
        let gateway = Arc::new(MockGateway::new(vec![
            tool_use_response("t1", "2024 Summer Olympics"),
            LlmResponse::from_text("Paris hosted the 2024 Summer Olympics."),
        ]));
        let executor = Arc::new(MockToolExecutor::returning(ToolResult::success(
            "get_article",
            "The 2024 Summer Olympics were held in Paris.",
        )));
        let uc = use_case(gateway.clone(), executor.clone());

        let output = uc
            .execute(input("Who hosted the 2024 Olympics?"), &NoProgress)
            .await
            .unwrap();

        assert_eq!(output.answer, "Paris hosted the 2024 Summer Olympics.");
        assert_eq!(output.tool_invocations, 1);
        assert_eq!(output.model_rounds, 2);

        // Executor saw exactly the model's arguments
        let calls = executor.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].tool_name, "get_article");
        assert_eq!(calls[0].get_string("search_term"), Some("2024 Summer Olympics"));

        // question, tool request, tool result, answer
        let messages = output.transcript.messages();
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[1].role(), Role::Assistant);
        assert_eq!(messages[1].tool_use_ids().collect::<Vec<_>>(), vec!["t1"]);
        assert_eq!(messages[2].role(), Role::User);
        assert_eq!(messages[2].tool_result_ids().collect::<Vec<_>>(), vec!["t1"]);
        let (_, content, status) = messages[2].content()[0].as_tool_result().unwrap();
        assert_eq!(content, "The 2024 Summer Olympics were held in Paris.");
        assert_eq!(status, ToolResultStatus::Success);
    }

    #[tokio::test]
    async fn test_second_request_carries_tool_request_and_result() {
        let gateway = Arc::new(MockGateway::new(vec![
            tool_use_response("tooluse_abc", "Rust"),
            LlmResponse::from_text("Done"),
        ]));
        let executor = Arc::new(MockToolExecutor::returning(ToolResult::success(
            "get_article",
            "Rust is a language.",
        )));
        let uc = use_case(gateway.clone(), executor);

        uc.execute(input("What is Rust?"), &NoProgress).await.unwrap();

        let requests = gateway.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].messages.len(), 1);

        let second = &requests[1].messages;
        assert_eq!(second.len(), 3);
        assert_eq!(second[1].tool_use_ids().collect::<Vec<_>>(), vec!["tooluse_abc"]);
        assert_eq!(
            second[2].tool_result_ids().collect::<Vec<_>>(),
            vec!["tooluse_abc"]
        );
    }

    #[tokio::test]
    async fn test_tool_failure_is_reported_to_model() {
        let gateway = Arc::new(MockGateway::new(vec![
            tool_use_response("t1", "Xyzzyqwert"),
            LlmResponse::from_text("I could not find an article about that."),
        ]));
        let executor = Arc::new(MockToolExecutor::returning(ToolResult::failure(
            "get_article",
            ToolError::not_found("article for 'Xyzzyqwert'"),
        )));
        let uc = use_case(gateway.clone(), executor);

        let output = uc.execute(input("What is Xyzzyqwert?"), &NoProgress).await.unwrap();

        assert_eq!(output.answer, "I could not find an article about that.");
        let (id, content, status) = output.transcript.messages()[2].content()[0]
            .as_tool_result()
            .unwrap();
        assert_eq!(id, "t1");
        assert_eq!(status, ToolResultStatus::Error);
        assert!(content.contains("not found"));
    }

    #[tokio::test]
    async fn test_request_shape_is_stable_across_rounds() {
        let gateway = Arc::new(MockGateway::new(vec![
            tool_use_response("t1", "A"),
            tool_use_response("t2", "B"),
            LlmResponse::from_text("Answer"),
        ]));
        let executor = Arc::new(MockToolExecutor::returning(ToolResult::success(
            "get_article",
            "text",
        )));
        let uc = use_case(gateway.clone(), executor);

        uc.execute(input("Compare A and B"), &NoProgress).await.unwrap();

        let requests = gateway.requests();
        assert_eq!(requests.len(), 3);
        for request in &requests {
            assert_eq!(request.tools, requests[0].tools);
            assert_eq!(request.system_prompt, requests[0].system_prompt);
            assert_eq!(request.temperature, 0.0);
        }
        assert_eq!(requests[0].tools.len(), 1);
        assert_eq!(requests[0].tools[0]["name"], "get_article");
        assert!(requests[0].system_prompt.contains("get_article"));
    }

    #[tokio::test]
    async fn test_endless_tool_requests_hit_round_limit() {
        let gateway = Arc::new(MockGateway::repeating(tool_use_response("t", "loop")));
        let executor = Arc::new(MockToolExecutor::returning(ToolResult::success(
            "get_article",
            "text",
        )));
        let uc = use_case(gateway.clone(), executor.clone());

        let input = input("Loop forever")
            .with_execution(ExecutionParams::default().with_max_tool_turns(3));
        let err = uc.execute(input, &NoProgress).await.unwrap_err();

        assert!(matches!(
            err,
            AnswerQuestionError::NonTermination { max_rounds: 3 }
        ));
        assert_eq!(executor.calls().len(), 3);
        assert_eq!(gateway.requests().len(), 4);
    }

    #[tokio::test]
    async fn test_gateway_error_is_service_unavailable() {
        let gateway = Arc::new(MockGateway::failing(GatewayError::ConnectionError(
            "no route".to_string(),
        )));
        let executor = Arc::new(MockToolExecutor::returning(ToolResult::success(
            "get_article",
            "text",
        )));
        let uc = use_case(gateway, executor);

        let err = uc.execute(input("Anything"), &NoProgress).await.unwrap_err();

        assert!(matches!(
            err,
            AnswerQuestionError::ServiceUnavailable(GatewayError::ConnectionError(_))
        ));
    }

    #[tokio::test]
    async fn test_slow_model_times_out() {
        let gateway = Arc::new(
            MockGateway::new(vec![LlmResponse::from_text("late")])
                .with_delay(Duration::from_secs(5)),
        );
        let executor = Arc::new(MockToolExecutor::returning(ToolResult::success(
            "get_article",
            "text",
        )));
        let uc = use_case(gateway, executor);

        let input = input("Anything").with_execution(
            ExecutionParams::default().with_request_timeout(Some(Duration::from_millis(20))),
        );
        let err = uc.execute(input, &NoProgress).await.unwrap_err();

        assert!(matches!(
            err,
            AnswerQuestionError::ServiceUnavailable(GatewayError::Timeout)
        ));
    }

    #[tokio::test]
    async fn test_empty_response_is_error() {
        let gateway = Arc::new(MockGateway::new(vec![LlmResponse {
            content: vec![],
            stop_reason: StopReason::EndTurn,
            model: None,
        }]));
        let executor = Arc::new(MockToolExecutor::returning(ToolResult::success(
            "get_article",
            "text",
        )));
        let uc = use_case(gateway, executor);

        let err = uc.execute(input("Anything"), &NoProgress).await.unwrap_err();
        assert!(matches!(err, AnswerQuestionError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_tool_output_is_capped() {
        let gateway = Arc::new(MockGateway::new(vec![
            tool_use_response("t1", "Long"),
            LlmResponse::from_text("ok"),
        ]));
        let executor = Arc::new(MockToolExecutor::returning(ToolResult::success(
            "get_article",
            "y".repeat(1000),
        )));
        let uc = use_case(gateway, executor);

        let input = input("Long article?").with_execution(
            ExecutionParams::default().with_max_tool_result_bytes(Some(100)),
        );
        let output = uc.execute(input, &NoProgress).await.unwrap();

        let (_, content, _) = output.transcript.messages()[2].content()[0]
            .as_tool_result()
            .unwrap();
        assert!(content.starts_with(&"y".repeat(100)));
        assert!(content.contains("[truncated: 100 of 1000 bytes shown]"));
    }

    #[tokio::test]
    async fn test_stop_reason_other_than_tool_use_is_final() {
        let mut response = tool_use_response("t1", "ignored");
        response.content.insert(0, ContentBlock::Text("Partial".to_string()));
        response.stop_reason = StopReason::MaxTokens;
        let gateway = Arc::new(MockGateway::new(vec![response]));
        let executor = Arc::new(MockToolExecutor::returning(ToolResult::success(
            "get_article",
            "text",
        )));
        let uc = use_case(gateway, executor.clone());

        let output = uc.execute(input("Anything"), &NoProgress).await.unwrap();

        assert_eq!(output.answer, "Partial");
        assert!(executor.calls().is_empty());
    }
}
