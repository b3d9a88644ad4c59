//! JSON Schema tool converter.
//!
//! Default implementation of [`ToolSchemaPort`] that produces provider-neutral
//! JSON Schema for the native tool-use API.

use wikibot_application::ports::tool_schema::ToolSchemaPort;
use wikibot_domain::tool::entities::{ToolDefinition, ToolSpec};

/// Default implementation producing provider-neutral JSON Schema.
///
/// `param_type` maps to the JSON Schema type of the same name; anything
/// unrecognised becomes `"string"`.
pub struct JsonSchemaToolConverter;

impl ToolSchemaPort for JsonSchemaToolConverter {
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();

        for param in &tool.parameters {
            let schema_type = match param.param_type.as_str() {
                "number" => "number",
                "integer" => "integer",
                "boolean" => "boolean",
                _ => "string",
            };

            properties.insert(
                param.name.clone(),
                serde_json::json!({
                    "type": schema_type,
                    "description": param.description,
                }),
            );

            if param.required {
                required.push(serde_json::json!(param.name));
            }
        }

        serde_json::json!({
            "name": tool.name,
            "description": tool.description,
            "input_schema": {
                "type": "object",
                "properties": properties,
                "required": required,
            }
        })
    }

    fn all_tools_schema(&self, spec: &ToolSpec) -> Vec<serde_json::Value> {
        let mut tools: Vec<&ToolDefinition> = spec.all().collect();
        tools.sort_by_key(|t| &t.name);
        tools.into_iter().map(|t| self.tool_to_schema(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::article::get_article_definition;
    use wikibot_domain::tool::entities::ToolParameter;

    #[test]
    fn test_get_article_schema() {
        let schema = JsonSchemaToolConverter.tool_to_schema(&get_article_definition());

        assert_eq!(
            schema,
            serde_json::json!({
                "name": "get_article",
                "description": "A tool to retrieve an up to date Wikipedia article.",
                "input_schema": {
                    "type": "object",
                    "properties": {
                        "search_term": {
                            "type": "string",
                            "description": "The search term to find a wikipedia article by title"
                        }
                    },
                    "required": ["search_term"]
                }
            })
        );
    }

    #[test]
    fn test_param_types() {
        let tool = ToolDefinition::new("t", "typed")
            .with_parameter(ToolParameter::new("n", "number", false).with_type("number"))
            .with_parameter(ToolParameter::new("i", "integer", false).with_type("integer"))
            .with_parameter(ToolParameter::new("b", "boolean", false).with_type("boolean"))
            .with_parameter(ToolParameter::new("x", "other", false).with_type("path"));

        let schema = JsonSchemaToolConverter.tool_to_schema(&tool);
        let props = &schema["input_schema"]["properties"];
        assert_eq!(props["n"]["type"], "number");
        assert_eq!(props["i"]["type"], "integer");
        assert_eq!(props["b"]["type"], "boolean");
        assert_eq!(props["x"]["type"], "string");
        assert!(schema["input_schema"]["required"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_all_tools_schema_is_sorted_and_stable() {
        let spec = ToolSpec::new()
            .register(ToolDefinition::new("zeta", "Last"))
            .register(get_article_definition())
            .register(ToolDefinition::new("alpha", "First"));

        let first = JsonSchemaToolConverter.all_tools_schema(&spec);
        let second = JsonSchemaToolConverter.all_tools_schema(&spec);

        let names: Vec<_> = first.iter().map(|t| t["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["alpha", "get_article", "zeta"]);
        assert_eq!(first, second);
    }
}
