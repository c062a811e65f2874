//! Generative-text capability.

use async_trait::async_trait;

/// Errors from a text generation backend.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider answered with a non-2xx status.
    #[error("Provider API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The provider answered, but not with anything we can use.
    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),

    /// No provider is reachable or configured.
    #[error("Provider unavailable: {0}")]
    Unavailable(String),
}

/// A single-turn prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            max_tokens: 1000,
            temperature: 0.7,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// Turns a prompt into free text. No schema is guaranteed; callers parse
/// defensively.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Backend identifier for logs (e.g. model name).
    fn id(&self) -> &str;

    async fn generate(&self, request: GenerationRequest) -> Result<String, GenerationError>;
}
