//! HTTP client for the GitHub scraper function.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::scanner::{ScanError, ScanReport, SkillScanner};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScanRequest<'a> {
    username: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    github_token: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    data: Option<ScanReport>,
}

/// Posts `{username, githubToken}` to a scraper endpoint.
pub struct HttpScanner {
    client: Client,
    url: String,
}

impl HttpScanner {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, ScanError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

/// Decode a scraper reply.
///
/// Accepts the bare `{success, data, error}` envelope, or the same envelope
/// serialized as a string inside a function-invocation wrapper
/// `{statusCode, body}`.
pub fn parse_reply(text: &str) -> Result<ScanReport, ScanError> {
    let mut value: Value = serde_json::from_str(text)
        .map_err(|e| ScanError::InvalidResponse(format!("not JSON: {e}")))?;

    let wrapped = value.get("body").and_then(Value::as_str).map(str::to_owned);
    if let Some(body) = wrapped {
        value = serde_json::from_str(&body)
            .map_err(|e| ScanError::InvalidResponse(format!("wrapped body is not JSON: {e}")))?;
    }

    let envelope: Envelope = serde_json::from_value(value)
        .map_err(|e| ScanError::InvalidResponse(format!("unexpected envelope: {e}")))?;

    if !envelope.success {
        return Err(ScanError::Rejected(
            envelope
                .error
                .unwrap_or_else(|| "scanner reported failure".to_string()),
        ));
    }

    envelope
        .data
        .ok_or_else(|| ScanError::InvalidResponse("successful reply without data".into()))
}

#[async_trait]
impl SkillScanner for HttpScanner {
    async fn scan(&self, username: &str, token: Option<&str>) -> Result<ScanReport, ScanError> {
        let response = self
            .client
            .post(&self.url)
            .json(&ScanRequest {
                username,
                github_token: token,
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ScanError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let report = parse_reply(&body)?;
        tracing::debug!(
            username = %username,
            skills = report.skills.len(),
            "GitHub scan completed"
        );
        Ok(report)
    }
}
