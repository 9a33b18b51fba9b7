use anyhow::Result;
use async_trait::async_trait;

/// Trait for hosted generative-model providers.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Provider name (e.g., "gemini", "mock").
    fn name(&self) -> &str;

    /// Send a completion request and return the response text.
    async fn complete(&self, request: &LlmRequest) -> Result<LlmResponse>;
}

/// Request to an LLM provider.
#[derive(Debug, Clone)]
pub struct LlmRequest {
    pub model: String,
    pub prompt: String,
    /// Ask the provider to constrain the response to a JSON payload.
    pub json_response: bool,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

impl LlmRequest {
    /// A free-text completion request.
    pub fn text(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            json_response: false,
            temperature: None,
            max_tokens: None,
        }
    }

    /// A completion request expecting a JSON payload.
    pub fn json(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            json_response: true,
            ..Self::text(model, prompt)
        }
    }
}

/// Response from an LLM provider.
#[derive(Debug, Clone)]
pub struct LlmResponse {
    pub content: String,
    pub provider: String,
    pub model: String,
    pub tokens_used: u64,
    pub latency_ms: u64,
}
