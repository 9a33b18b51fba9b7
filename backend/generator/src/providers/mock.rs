use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;

use studyforge_core::{LlmProvider, LlmRequest, LlmResponse};

/// A mock provider that returns canned responses in order, for tests and
/// offline runs.
pub struct MockProvider {
    name: String,
    responses: Mutex<VecDeque<String>>,
    fail_with: Option<String>,
    calls: AtomicUsize,
}

impl MockProvider {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            responses: Mutex::new(VecDeque::new()),
            fail_with: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Queue a canned response; each call consumes one.
    pub fn with_response(self, response: impl Into<String>) -> Self {
        self.responses
            .lock()
            .expect("mock response queue poisoned")
            .push_back(response.into());
        self
    }

    /// Make every call fail with the given message.
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.fail_with = Some(message.into());
        self
    }

    /// Number of completion calls received.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(&self, request: &LlmRequest) -> Result<LlmResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.fail_with {
            anyhow::bail!("{message}");
        }
        let content = self
            .responses
            .lock()
            .expect("mock response queue poisoned")
            .pop_front()
            .unwrap_or_else(|| "Mock response".to_string());
        Ok(LlmResponse {
            content,
            provider: self.name.clone(),
            model: request.model.clone(),
            tokens_used: 0,
            latency_ms: 0,
        })
    }
}
