//! Bedrock LLM gateway
//!
//! Implements the stateless [`LlmGateway`] port over the Converse API. The
//! transcript is owned by the caller and sent in full on every request.

use super::{model_map, types};
use crate::config::FileBedrockConfig;
use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client as BedrockClient;
use aws_sdk_bedrockruntime::types as bedrock;
use std::sync::Arc;
use tracing::{debug, info};
use wikibot_application::ports::llm_gateway::{ConverseRequest, GatewayError, LlmGateway};
use wikibot_domain::LlmResponse;

pub struct BedrockLlmGateway {
    client: Arc<BedrockClient>,
    region: Option<String>,
    cross_region: bool,
}

impl BedrockLlmGateway {
    /// Create a new Bedrock gateway.
    ///
    /// Region and profile fall back to the AWS default chain (environment,
    /// shared config, instance metadata) when not configured.
    pub async fn new(config: &FileBedrockConfig) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());

        if let Some(ref region) = config.region {
            loader = loader.region(aws_config::Region::new(region.clone()));
        }
        if let Some(ref profile) = config.profile {
            loader = loader.profile_name(profile);
        }

        let aws_config = loader.load().await;
        let region = aws_config.region().map(|r| r.to_string());
        info!(
            region = region.as_deref().unwrap_or("<unset>"),
            "Bedrock gateway initialized"
        );

        Self {
            client: Arc::new(BedrockClient::new(&aws_config)),
            region,
            cross_region: config.cross_region,
        }
    }

    /// Resolved AWS region, if any.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

#[async_trait]
impl LlmGateway for BedrockLlmGateway {
    async fn converse(&self, request: &ConverseRequest<'_>) -> Result<LlmResponse, GatewayError> {
        let model_id =
            model_map::to_bedrock_model_id(request.model, self.cross_region, self.region());

        let messages = request
            .messages
            .iter()
            .map(types::convert_message)
            .collect::<Result<Vec<_>, _>>()?;

        let inference = bedrock::InferenceConfiguration::builder()
            .max_tokens(i32::try_from(request.inference.max_tokens).unwrap_or(i32::MAX))
            .temperature(request.inference.temperature)
            .build();

        let mut call = self
            .client
            .converse()
            .model_id(&model_id)
            .set_messages(Some(messages))
            .inference_config(inference);

        if !request.system_prompt.is_empty() {
            call = call.system(bedrock::SystemContentBlock::Text(
                request.system_prompt.to_string(),
            ));
        }

        if let Some(tool_config) = types::convert_tool_config(request.tools)? {
            call = call.tool_config(tool_config);
        }

        debug!(
            model = %model_id,
            messages = request.messages.len(),
            tools = request.tools.len(),
            "Calling Bedrock Converse API"
        );

        let response = call
            .send()
            .await
            .map_err(|e| types::convert_converse_error(&e))?;

        let output = response.output().ok_or_else(|| {
            GatewayError::RequestFailed("No output in Bedrock response".to_string())
        })?;

        Ok(types::convert_converse_output(
            output,
            response.stop_reason(),
            &model_id,
        ))
    }
}
