//! Bedrock model ID mapping
//!
//! Maps domain `Model` variants to Bedrock model identifiers,
//! with optional cross-region inference prefix.

use wikibot_domain::Model;

/// Convert a domain Model to a Bedrock model ID string.
///
/// - Custom models are passed through verbatim (raw model ids, profile ARNs).
/// - Models that require inference profiles always use the region-group
///   prefix (`us.`, `eu.`, etc.) regardless of `cross_region`.
/// - When `cross_region` is true, every other known model gets the prefix too.
pub fn to_bedrock_model_id(model: &Model, cross_region: bool, region: Option<&str>) -> String {
    let base_id = match model {
        Model::ClaudeSonnet35V2 => "anthropic.claude-3-5-sonnet-20241022-v2:0",
        Model::ClaudeHaiku35 => "anthropic.claude-3-5-haiku-20241022-v1:0",
        Model::ClaudeSonnet37 => "anthropic.claude-3-7-sonnet-20250219-v1:0",
        Model::ClaudeSonnet4 => "anthropic.claude-sonnet-4-20250514-v1:0",
        Model::ClaudeSonnet45 => "anthropic.claude-sonnet-4-5-20250929-v1:0",
        Model::ClaudeHaiku45 => "anthropic.claude-haiku-4-5-20251001-v1:0",
        Model::Custom(id) => return id.clone(),
    };

    if cross_region || requires_inference_profile(model) {
        let prefix = inference_profile_prefix(region.unwrap_or("us-east-1"));
        format!("{prefix}.{base_id}")
    } else {
        base_id.to_string()
    }
}

/// Whether a model requires an inference profile (cannot use on-demand throughput).
fn requires_inference_profile(model: &Model) -> bool {
    matches!(
        model,
        Model::ClaudeSonnet37 | Model::ClaudeSonnet4 | Model::ClaudeSonnet45 | Model::ClaudeHaiku45
    )
}

/// Derive the inference profile region group from an AWS region string.
///
/// `us-east-1` → `us`, `eu-west-1` → `eu`, `ap-northeast-1` → `apac`.
fn inference_profile_prefix(region: &str) -> &'static str {
    match region.split('-').next() {
        Some("eu") => "eu",
        Some("ap") => "apac",
        _ => "us",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model_is_on_demand() {
        let id = to_bedrock_model_id(&Model::default(), false, Some("us-west-2"));
        assert_eq!(id, "anthropic.claude-3-5-sonnet-20241022-v2:0");
    }

    #[test]
    fn test_sonnet45_uses_inference_profile() {
        let id = to_bedrock_model_id(&Model::ClaudeSonnet45, false, Some("us-east-1"));
        assert_eq!(id, "us.anthropic.claude-sonnet-4-5-20250929-v1:0");
    }

    #[test]
    fn test_eu_region_prefix() {
        let id = to_bedrock_model_id(&Model::ClaudeSonnet4, false, Some("eu-central-1"));
        assert_eq!(id, "eu.anthropic.claude-sonnet-4-20250514-v1:0");
    }

    #[test]
    fn test_ap_region_prefix() {
        let id = to_bedrock_model_id(&Model::ClaudeHaiku45, false, Some("ap-northeast-1"));
        assert_eq!(id, "apac.anthropic.claude-haiku-4-5-20251001-v1:0");
    }

    #[test]
    fn test_cross_region_prefixes_on_demand_models() {
        let id = to_bedrock_model_id(&Model::ClaudeSonnet35V2, true, Some("us-west-2"));
        assert_eq!(id, "us.anthropic.claude-3-5-sonnet-20241022-v2:0");
    }

    #[test]
    fn test_unknown_region_falls_back_to_us() {
        let id = to_bedrock_model_id(&Model::ClaudeSonnet37, false, None);
        assert_eq!(id, "us.anthropic.claude-3-7-sonnet-20250219-v1:0");
    }

    #[test]
    fn test_custom_model_passthrough() {
        let raw = "arn:aws:bedrock:us-east-1:123456789012:inference-profile/custom";
        let id = to_bedrock_model_id(&Model::Custom(raw.to_string()), true, Some("eu-west-1"));
        assert_eq!(id, raw);
    }
}
