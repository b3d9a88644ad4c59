//! Type conversions between AWS Bedrock SDK and domain types
//!
//! Converts domain transcript messages and tool declarations to Converse
//! request shapes, and Converse responses back to domain `LlmResponse`.

use aws_sdk_bedrockruntime::types as bedrock;
use aws_smithy_types::Document;
use std::collections::HashMap;
use wikibot_application::ports::llm_gateway::GatewayError;
use wikibot_domain::{ContentBlock, LlmResponse, Message, Role, StopReason, ToolResultStatus};

// ─── Bedrock → Domain ────────────────────────────────────────────

/// Convert Bedrock stop reason to domain StopReason.
pub fn convert_stop_reason(reason: &bedrock::StopReason) -> StopReason {
    match reason {
        bedrock::StopReason::EndTurn => StopReason::EndTurn,
        bedrock::StopReason::ToolUse => StopReason::ToolUse,
        bedrock::StopReason::MaxTokens => StopReason::MaxTokens,
        other => StopReason::Other(other.as_str().to_string()),
    }
}

/// Convert a single Bedrock content block to a domain ContentBlock.
///
/// Returns `None` for block types the conversation never carries
/// (Image, GuardContent, reasoning, etc.).
pub fn convert_content_block(block: &bedrock::ContentBlock) -> Option<ContentBlock> {
    match block {
        bedrock::ContentBlock::Text(text) => Some(ContentBlock::Text(text.clone())),
        bedrock::ContentBlock::ToolUse(tool_use) => {
            let input = match document_to_json(tool_use.input()) {
                serde_json::Value::Object(map) => map.into_iter().collect(),
                _ => HashMap::new(),
            };
            Some(ContentBlock::ToolUse {
                id: tool_use.tool_use_id().to_string(),
                name: tool_use.name().to_string(),
                input,
            })
        }
        _ => None,
    }
}

/// Convert a Bedrock ConverseOutput to a domain LlmResponse.
pub fn convert_converse_output(
    output: &bedrock::ConverseOutput,
    stop_reason: &bedrock::StopReason,
    model_id: &str,
) -> LlmResponse {
    let content = match output {
        bedrock::ConverseOutput::Message(message) => message
            .content()
            .iter()
            .filter_map(convert_content_block)
            .collect(),
        _ => Vec::new(),
    };

    LlmResponse {
        content,
        stop_reason: convert_stop_reason(stop_reason),
        model: Some(model_id.to_string()),
    }
}

// ─── Domain → Bedrock ────────────────────────────────────────────

fn build_failed(what: &str, err: impl std::fmt::Display) -> GatewayError {
    GatewayError::RequestFailed(format!("Failed to build {}: {}", what, err))
}

/// Convert a domain content block to its Converse wire shape.
pub fn convert_block(block: &ContentBlock) -> Result<bedrock::ContentBlock, GatewayError> {
    match block {
        ContentBlock::Text(text) => Ok(bedrock::ContentBlock::Text(text.clone())),
        ContentBlock::ToolUse { id, name, input } => {
            let input_doc = json_to_document(&serde_json::json!(input));
            bedrock::ToolUseBlock::builder()
                .tool_use_id(id)
                .name(name)
                .input(input_doc)
                .build()
                .map(bedrock::ContentBlock::ToolUse)
                .map_err(|e| build_failed("toolUse block", e))
        }
        ContentBlock::ToolResult {
            tool_use_id,
            content,
            status,
        } => {
            let status = match status {
                ToolResultStatus::Success => bedrock::ToolResultStatus::Success,
                ToolResultStatus::Error => bedrock::ToolResultStatus::Error,
            };
            bedrock::ToolResultBlock::builder()
                .tool_use_id(tool_use_id)
                .content(bedrock::ToolResultContentBlock::Text(content.clone()))
                .status(status)
                .build()
                .map(bedrock::ContentBlock::ToolResult)
                .map_err(|e| build_failed("toolResult block", e))
        }
    }
}

/// Convert a transcript message to a Bedrock Message.
pub fn convert_message(message: &Message) -> Result<bedrock::Message, GatewayError> {
    let role = match message.role() {
        Role::User => bedrock::ConversationRole::User,
        Role::Assistant => bedrock::ConversationRole::Assistant,
    };
    let content = message
        .content()
        .iter()
        .map(convert_block)
        .collect::<Result<Vec<_>, _>>()?;

    bedrock::Message::builder()
        .role(role)
        .set_content(Some(content))
        .build()
        .map_err(|e| build_failed("message", e))
}

/// Convert a JSON tool schema (from ToolSchemaPort) to a Bedrock Tool::ToolSpec.
///
/// Returns `None` if the schema has no name.
pub fn convert_tool_schema(schema: &serde_json::Value) -> Option<bedrock::Tool> {
    let name = schema.get("name")?.as_str()?;
    let description = schema.get("description").and_then(|d| d.as_str());

    let input_schema_json = schema.get("input_schema").cloned().unwrap_or_else(|| {
        serde_json::json!({
            "type": "object",
            "properties": {},
        })
    });
    let input_schema = json_to_document(&input_schema_json);

    let mut builder = bedrock::ToolSpecification::builder()
        .name(name)
        .input_schema(bedrock::ToolInputSchema::Json(input_schema));
    if let Some(desc) = description {
        builder = builder.description(desc);
    }

    builder.build().ok().map(bedrock::Tool::ToolSpec)
}

/// Build the `toolConfig` for a request, or `None` when no tools are declared.
pub fn convert_tool_config(
    tools: &[serde_json::Value],
) -> Result<Option<bedrock::ToolConfiguration>, GatewayError> {
    let bedrock_tools: Vec<bedrock::Tool> = tools.iter().filter_map(convert_tool_schema).collect();
    if bedrock_tools.is_empty() {
        return Ok(None);
    }

    bedrock::ToolConfiguration::builder()
        .set_tools(Some(bedrock_tools))
        .build()
        .map(Some)
        .map_err(|e| build_failed("tool config", e))
}

// ─── JSON ↔ Document helpers ─────────────────────────────────────

/// Convert a serde_json::Value to an aws_smithy_types::Document.
pub fn json_to_document(value: &serde_json::Value) -> Document {
    match value {
        serde_json::Value::Null => Document::Null,
        serde_json::Value::Bool(b) => Document::Bool(*b),
        serde_json::Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                Document::Number(aws_smithy_types::Number::PosInt(u))
            } else if let Some(i) = n.as_i64() {
                Document::Number(aws_smithy_types::Number::NegInt(i))
            } else if let Some(f) = n.as_f64() {
                Document::Number(aws_smithy_types::Number::Float(f))
            } else {
                Document::Null
            }
        }
        serde_json::Value::String(s) => Document::String(s.clone()),
        serde_json::Value::Array(arr) => {
            Document::Array(arr.iter().map(json_to_document).collect())
        }
        serde_json::Value::Object(map) => Document::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), json_to_document(v)))
                .collect(),
        ),
    }
}

/// Convert an aws_smithy_types::Document to a serde_json::Value.
pub fn document_to_json(doc: &Document) -> serde_json::Value {
    match doc {
        Document::Null => serde_json::Value::Null,
        Document::Bool(b) => serde_json::Value::Bool(*b),
        Document::Number(n) => match n {
            aws_smithy_types::Number::PosInt(i) => serde_json::json!(*i),
            aws_smithy_types::Number::NegInt(i) => serde_json::json!(*i),
            aws_smithy_types::Number::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
        },
        Document::String(s) => serde_json::Value::String(s.clone()),
        Document::Array(arr) => {
            serde_json::Value::Array(arr.iter().map(document_to_json).collect())
        }
        Document::Object(map) => serde_json::Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), document_to_json(v)))
                .collect(),
        ),
    }
}

/// Convert a Bedrock SDK error to a GatewayError.
pub fn convert_converse_error(
    err: &aws_sdk_bedrockruntime::error::SdkError<
        aws_sdk_bedrockruntime::operation::converse::ConverseError,
    >,
) -> GatewayError {
    use aws_sdk_bedrockruntime::error::{DisplayErrorContext, SdkError};
    use aws_sdk_bedrockruntime::operation::converse::ConverseError;

    match err {
        SdkError::ServiceError(service_err) => match service_err.err() {
            ConverseError::ThrottlingException(e) => {
                GatewayError::Throttled(format!("Bedrock throttled: {}", e))
            }
            ConverseError::ModelNotReadyException(e) => {
                GatewayError::ModelNotAvailable(format!("Bedrock model not ready: {}", e))
            }
            ConverseError::ResourceNotFoundException(e) => {
                GatewayError::ModelNotAvailable(format!("Bedrock model not found: {}", e))
            }
            ConverseError::AccessDeniedException(e) => {
                GatewayError::ModelNotAvailable(format!("Bedrock access denied: {}", e))
            }
            ConverseError::ValidationException(e) => {
                GatewayError::RequestFailed(format!("Bedrock validation error: {}", e))
            }
            ConverseError::ServiceUnavailableException(e) => {
                GatewayError::ConnectionError(format!("Bedrock unavailable: {}", e))
            }
            ConverseError::ModelTimeoutException(_) => GatewayError::Timeout,
            other => GatewayError::RequestFailed(format!(
                "Bedrock error: {}",
                DisplayErrorContext(other)
            )),
        },
        SdkError::TimeoutError(_) => GatewayError::Timeout,
        other => GatewayError::ConnectionError(format!(
            "Bedrock SDK error: {}",
            DisplayErrorContext(other)
        )),
    }
}
