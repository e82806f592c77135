// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Anthropic Messages API.
//!
//! Provides [`AnthropicClient`], which handles request construction,
//! authentication headers, and error-body parsing. Each call is attempted
//! exactly once; degradation on failure is the caller's responsibility.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::Value;
use switchyard_core::{ExternalReply, ReasoningModel, SwitchyardError};
use tracing::debug;

use crate::types::{ApiErrorResponse, ApiMessage, MessageRequest};

/// Default base URL for the Anthropic API.
const API_BASE_URL: &str = "https://api.anthropic.com";

/// HTTP client for Anthropic API communication.
///
/// Holds a pooled `reqwest::Client` and fixed invocation parameters, so a
/// single instance is safely shareable across concurrent requests.
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    client: reqwest::Client,
    model: String,
    max_tokens: u32,
    temperature: f32,
    base_url: String,
}

impl AnthropicClient {
    /// Creates a new Anthropic API client.
    ///
    /// # Arguments
    /// * `api_key` - Anthropic API key for authentication
    /// * `api_version` - API version string (e.g., "2023-06-01")
    /// * `model` - Model identifier
    /// * `max_tokens` - Generation cap per response
    /// * `temperature` - Sampling temperature (0 for deterministic output)
    pub fn new(
        api_key: &str,
        api_version: &str,
        model: String,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<Self, SwitchyardError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-api-key",
            HeaderValue::from_str(api_key).map_err(|e| {
                SwitchyardError::Config(format!("invalid API key header value: {e}"))
            })?,
        );
        headers.insert(
            "anthropic-version",
            HeaderValue::from_str(api_version).map_err(|e| {
                SwitchyardError::Config(format!("invalid API version header value: {e}"))
            })?,
        );
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| SwitchyardError::Provider {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            model,
            max_tokens,
            temperature,
            base_url: API_BASE_URL.to_string(),
        })
    }

    /// Overrides the base URL (for self-hosted proxies and tests).
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    /// Sends one completion request and returns the raw response body.
    async fn complete_message(&self, prompt: &str) -> Result<Value, SwitchyardError> {
        let request = MessageRequest {
            model: self.model.clone(),
            messages: vec![ApiMessage::user(prompt)],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| SwitchyardError::Provider {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, model = %self.model, "completion response received");

        let body = response.text().await.map_err(|e| SwitchyardError::Provider {
            message: format!("failed to read response body: {e}"),
            source: Some(Box::new(e)),
        })?;

        if !status.is_success() {
            let message = if let Ok(api_err) = serde_json::from_str::<ApiErrorResponse>(&body) {
                format!(
                    "Anthropic API error ({}): {}",
                    api_err.error.type_, api_err.error.message
                )
            } else {
                format!("API returned {status}: {body}")
            };
            return Err(SwitchyardError::Provider {
                message,
                source: None,
            });
        }

        serde_json::from_str(&body).map_err(|e| SwitchyardError::Provider {
            message: format!("failed to parse API response: {e}"),
            source: Some(Box::new(e)),
        })
    }
}

#[async_trait]
impl ReasoningModel for AnthropicClient {
    async fn complete(&self, prompt: &str) -> Result<ExternalReply, SwitchyardError> {
        let body = self.complete_message(prompt).await?;
        Ok(ExternalReply::from_value(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> AnthropicClient {
        AnthropicClient::new(
            "test-api-key",
            "2023-06-01",
            "claude-sonnet-4-20250514".into(),
            1024,
            0.0,
        )
        .unwrap()
        .with_base_url(base_url.to_string())
    }

    fn message_body(text: &str) -> serde_json::Value {
        serde_json::json!({
            "id": "msg_test",
            "type": "message",
            "role": "assistant",
            "content": [{"type": "text", "text": text}],
            "model": "claude-sonnet-4-20250514",
            "stop_reason": "end_turn",
            "usage": {"input_tokens": 10, "output_tokens": 5}
        })
    }

    #[tokio::test]
    async fn complete_normalizes_content_blocks() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(message_body("Hi there!")))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let reply = client.complete("Hello").await.unwrap();
        assert_eq!(reply.into_text(), "Hi there!");
    }

    #[tokio::test]
    async fn complete_sends_headers_and_temperature() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .and(header("x-api-key", "test-api-key"))
            .and(header("anthropic-version", "2023-06-01"))
            .and(body_partial_json(serde_json::json!({
                "model": "claude-sonnet-4-20250514",
                "temperature": 0.0,
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(message_body("ok")))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let result = client.complete("Hello").await;
        assert!(result.is_ok(), "headers/body should match: {result:?}");
    }

    #[tokio::test]
    async fn complete_fails_on_api_error() {
        let server = MockServer::start().await;

        let error_body = serde_json::json!({
            "error": {"type": "invalid_request_error", "message": "Bad model"}
        });

        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(400).set_body_json(&error_body))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.complete("Hello").await.unwrap_err().to_string();
        assert!(err.contains("invalid_request_error"), "got: {err}");
    }

    #[tokio::test]
    async fn transient_errors_are_not_retried() {
        let server = MockServer::start().await;

        let error_body = serde_json::json!({
            "error": {"type": "overloaded_error", "message": "Service overloaded"}
        });

        // Exactly one attempt, even for a retryable-looking status.
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(503).set_body_json(&error_body))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.complete("Hello").await.unwrap_err().to_string();
        assert!(err.contains("overloaded_error"), "got: {err}");
    }

    #[tokio::test]
    async fn unparseable_success_body_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.complete("Hello").await.unwrap_err().to_string();
        assert!(err.contains("parse"), "got: {err}");
    }
}
