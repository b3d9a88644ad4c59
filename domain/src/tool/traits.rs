//! Tool domain traits
//!
//! Contains pure domain logic traits for tool validation.
//! The async ToolExecutorPort is defined in the application layer (ports).

use super::entities::{ToolCall, ToolDefinition};

/// Validator for tool calls
///
/// This is a pure domain trait that validates tool calls
/// against their definitions without any I/O operations.
pub trait ToolValidator {
    /// Validate a tool call against its definition
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition) -> Result<(), String>;
}

/// Default implementation of ToolValidator
#[derive(Debug, Clone, Default)]
pub struct DefaultToolValidator;

impl ToolValidator for DefaultToolValidator {
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition) -> Result<(), String> {
        for param in &definition.parameters {
            match call.arguments.get(&param.name) {
                None if param.required => {
                    return Err(format!(
                        "Missing required parameter '{}' for tool '{}'",
                        param.name, definition.name
                    ));
                }
                Some(value) if !matches_type(value, &param.param_type) => {
                    return Err(format!(
                        "Parameter '{}' for tool '{}' must be a {}",
                        param.name, definition.name, param.param_type
                    ));
                }
                _ => {}
            }
        }

        for arg_name in call.arguments.keys() {
            if !definition.parameters.iter().any(|p| &p.name == arg_name) {
                return Err(format!(
                    "Unknown parameter '{}' for tool '{}'",
                    arg_name, definition.name
                ));
            }
        }

        Ok(())
    }
}

fn matches_type(value: &serde_json::Value, param_type: &str) -> bool {
    match param_type {
        "string" => value.is_string(),
        "number" => value.is_number(),
        "integer" => value.is_i64() || value.is_u64(),
        "boolean" => value.is_boolean(),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::entities::ToolParameter;

    fn definition() -> ToolDefinition {
        ToolDefinition::new("get_article", "Fetch an article")
            .with_parameter(ToolParameter::new("search_term", "Search term", true))
    }

    #[test]
    fn test_validator_missing_required() {
        let call = ToolCall::new("get_article");
        let result = DefaultToolValidator.validate(&call, &definition());
        assert!(result.unwrap_err().contains("Missing required parameter"));
    }

    #[test]
    fn test_validator_unknown_param() {
        let call = ToolCall::new("get_article")
            .with_arg("search_term", "Rust")
            .with_arg("language", "en");
        let result = DefaultToolValidator.validate(&call, &definition());
        assert!(result.unwrap_err().contains("Unknown parameter 'language'"));
    }

    #[test]
    fn test_validator_wrong_type() {
        let call = ToolCall::new("get_article").with_arg("search_term", 7);
        let result = DefaultToolValidator.validate(&call, &definition());
        assert!(result.unwrap_err().contains("must be a string"));
    }

    #[test]
    fn test_validator_valid_call() {
        let call = ToolCall::new("get_article").with_arg("search_term", "Rust");
        assert!(DefaultToolValidator.validate(&call, &definition()).is_ok());
    }
}
