//! Model service configuration from TOML (`[bedrock]` section)

use serde::{Deserialize, Serialize};
use wikibot_application::InferenceParams;
use wikibot_domain::{DomainError, Model};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBedrockConfig {
    /// AWS region (default: resolved by the AWS default chain)
    pub region: Option<String>,
    /// AWS profile name for credentials (default: resolved by the AWS default chain)
    pub profile: Option<String>,
    /// Model alias (`claude-3.5-sonnet-v2`) or raw Bedrock model id
    pub model: String,
    /// Max tokens per response
    pub max_tokens: u32,
    /// Use the cross-region inference profile (`us.`, `eu.`, ...) for every model
    pub cross_region: bool,
}

impl Default for FileBedrockConfig {
    fn default() -> Self {
        let inference = InferenceParams::default();
        Self {
            region: None,
            profile: None,
            model: Model::default().to_string(),
            max_tokens: inference.max_tokens,
            cross_region: false,
        }
    }
}

impl FileBedrockConfig {
    pub fn parse_model(&self) -> Result<Model, DomainError> {
        Model::try_parse(&self.model)
    }

    /// Sampling stays at the default temperature of 0.
    pub fn inference_params(&self) -> InferenceParams {
        InferenceParams::default().with_max_tokens(self.max_tokens)
    }
}
