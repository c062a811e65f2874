//! HTTP adapter for an Anthropic-messages-compatible endpoint.
//!
//! Sends one user message per call and returns the first text block of the
//! reply. Calls are fire-once: there is a request timeout but no retry.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::provider::{GenerationError, GenerationRequest, TextGenerator};

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

/// Default model for challenge and quiz generation.
pub const DEFAULT_MODEL: &str = "claude-3-haiku-20240307";

/// Value sent in the `anthropic-version` header.
pub const API_VERSION: &str = "2023-06-01";

/// Connection settings for [`AnthropicGenerator`].
#[derive(Debug, Clone)]
pub struct AnthropicConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
}

impl AnthropicConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

pub struct AnthropicGenerator {
    client: Client,
    config: AnthropicConfig,
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

impl AnthropicGenerator {
    pub fn new(config: AnthropicConfig) -> Result<Self, GenerationError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.config.base_url.trim_end_matches('/'))
    }
}

/// Pull the first text block out of a messages response body.
fn first_text(body: MessagesResponse) -> Result<String, GenerationError> {
    body.content
        .into_iter()
        .find(|block| block.kind == "text")
        .and_then(|block| block.text)
        .ok_or_else(|| GenerationError::InvalidResponse("response had no text content".into()))
}

#[async_trait]
impl TextGenerator for AnthropicGenerator {
    fn id(&self) -> &str {
        &self.config.model
    }

    async fn generate(&self, request: GenerationRequest) -> Result<String, GenerationError> {
        let body = MessagesRequest {
            model: &self.config.model,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            messages: [ChatMessage {
                role: "user",
                content: &request.prompt,
            }],
        };

        let response = self
            .client
            .post(self.messages_url())
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GenerationError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: MessagesResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;

        tracing::debug!(model = %self.config.model, "Provider returned completion");
        first_text(parsed)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn request_body_has_messages_shape() {
        let body = MessagesRequest {
            model: DEFAULT_MODEL,
            max_tokens: 1000,
            temperature: 0.7,
            messages: [ChatMessage {
                role: "user",
                content: "hello",
            }],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], DEFAULT_MODEL);
        assert_eq!(json["max_tokens"], 1000);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hello");
    }

    #[test]
    fn first_text_block_is_returned() {
        let body: MessagesResponse = serde_json::from_value(serde_json::json!({
            "content": [
                {"type": "tool_use", "id": "x"},
                {"type": "text", "text": "{\"title\": \"t\"}"}
            ]
        }))
        .unwrap();
        assert_eq!(first_text(body).unwrap(), "{\"title\": \"t\"}");
    }

    #[test]
    fn empty_content_is_invalid() {
        let body: MessagesResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_matches!(first_text(body), Err(GenerationError::InvalidResponse(_)));
    }

    #[test]
    fn messages_url_tolerates_trailing_slash() {
        let mut config = AnthropicConfig::new("key");
        config.base_url = "http://localhost:8080/".into();
        let generator = AnthropicGenerator::new(config).unwrap();
        assert_eq!(generator.messages_url(), "http://localhost:8080/v1/messages");
    }
}
