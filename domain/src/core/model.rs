//! Model value object representing an LLM model

use super::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Available LLM models (Value Object)
///
/// Known Claude models are addressed by a short alias (`claude-3.5-sonnet-v2`).
/// Anything else is carried verbatim as [`Model::Custom`] and handed to the
/// provider as a raw model identifier, so fine-tuned models and inference
/// profile ARNs keep working without a code change.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    ClaudeSonnet35V2,
    ClaudeHaiku35,
    ClaudeSonnet37,
    ClaudeSonnet4,
    ClaudeSonnet45,
    ClaudeHaiku45,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::ClaudeSonnet35V2 => "claude-3.5-sonnet-v2",
            Model::ClaudeHaiku35 => "claude-3.5-haiku",
            Model::ClaudeSonnet37 => "claude-3.7-sonnet",
            Model::ClaudeSonnet4 => "claude-sonnet-4",
            Model::ClaudeSonnet45 => "claude-sonnet-4.5",
            Model::ClaudeHaiku45 => "claude-haiku-4.5",
            Model::Custom(s) => s,
        }
    }

    /// All models with a built-in alias
    pub fn known_models() -> Vec<Model> {
        vec![
            Model::ClaudeSonnet35V2,
            Model::ClaudeHaiku35,
            Model::ClaudeSonnet37,
            Model::ClaudeSonnet4,
            Model::ClaudeSonnet45,
            Model::ClaudeHaiku45,
        ]
    }

    /// Parse a model name, rejecting blank input.
    pub fn try_parse(s: &str) -> Result<Self, DomainError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidModel(
                "model name cannot be empty".to_string(),
            ));
        }
        let Ok(model) = trimmed.parse();
        Ok(model)
    }

    /// Check if this is a custom (raw identifier) model
    pub fn is_custom(&self) -> bool {
        matches!(self, Model::Custom(_))
    }
}

impl Default for Model {
    /// Returns the default model (Claude 3.5 Sonnet v2)
    fn default() -> Self {
        Model::ClaudeSonnet35V2
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "claude-3.5-sonnet-v2" | "claude-3-5-sonnet" => Model::ClaudeSonnet35V2,
            "claude-3.5-haiku" | "claude-3-5-haiku" => Model::ClaudeHaiku35,
            "claude-3.7-sonnet" | "claude-3-7-sonnet" => Model::ClaudeSonnet37,
            "claude-sonnet-4" => Model::ClaudeSonnet4,
            "claude-sonnet-4.5" => Model::ClaudeSonnet45,
            "claude-haiku-4.5" => Model::ClaudeHaiku45,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let Ok(model) = s.parse();
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_roundtrip() {
        for model in Model::known_models() {
            let s = model.to_string();
            let parsed: Model = s.parse().unwrap();
            assert_eq!(model, parsed);
        }
    }

    #[test]
    fn test_custom_model() {
        let model: Model = "anthropic.claude-v2:1".parse().unwrap();
        assert_eq!(model, Model::Custom("anthropic.claude-v2:1".to_string()));
        assert_eq!(model.to_string(), "anthropic.claude-v2:1");
        assert!(model.is_custom());
    }

    #[test]
    fn test_legacy_aliases() {
        let model: Model = "claude-3-5-sonnet".parse().unwrap();
        assert_eq!(model, Model::ClaudeSonnet35V2);
    }

    #[test]
    fn test_try_parse_rejects_blank() {
        assert!(Model::try_parse("").is_err());
        assert!(Model::try_parse("   ").is_err());
        assert_eq!(
            Model::try_parse(" claude-sonnet-4 ").unwrap(),
            Model::ClaudeSonnet4
        );
    }

    #[test]
    fn test_model_default() {
        assert_eq!(Model::default(), Model::ClaudeSonnet35V2);
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Model::ClaudeHaiku45).unwrap();
        assert_eq!(json, "\"claude-haiku-4.5\"");
        let back: Model = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Model::ClaudeHaiku45);
    }
}
