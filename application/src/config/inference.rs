//! Sampling parameters for model requests.

use serde::{Deserialize, Serialize};

/// Inference parameters sent with every model request.
///
/// Temperature is always `0.0`; only the output ceiling is configurable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceParams {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for InferenceParams {
    fn default() -> Self {
        Self {
            temperature: 0.0,
            max_tokens: 4096,
        }
    }
}

impl InferenceParams {
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}
