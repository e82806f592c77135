// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the hosted enterprise-QA chat-sync API.
//!
//! The service answers questions over private enterprise documents. One
//! synchronous exchange per call: `applicationId` + `userMessage` in,
//! a shape-varying JSON reply out. Exactly one attempt per call.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::Serialize;
use serde_json::Value;
use switchyard_core::{EnterpriseSearch, ExternalReply, SwitchyardError};
use tracing::debug;

/// Request body for the chat-sync endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChatSyncRequest<'a> {
    application_id: &'a str,
    user_message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<&'a str>,
}

/// HTTP client for the enterprise-search chat-sync API.
///
/// Holds a pooled `reqwest::Client` and the application identifier; a
/// single instance is safely shareable across concurrent requests.
#[derive(Debug, Clone)]
pub struct EnterpriseSearchClient {
    client: reqwest::Client,
    application_id: String,
    base_url: String,
}

impl EnterpriseSearchClient {
    /// Creates a new chat-sync client.
    ///
    /// `api_key`, when present, is sent as a bearer token on every call.
    pub fn new(
        base_url: String,
        application_id: String,
        api_key: Option<&str>,
    ) -> Result<Self, SwitchyardError> {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));
        if let Some(key) = api_key {
            headers.insert(
                "authorization",
                HeaderValue::from_str(&format!("Bearer {key}")).map_err(|e| {
                    SwitchyardError::Config(format!("invalid API key header value: {e}"))
                })?,
            );
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| SwitchyardError::Search {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            application_id,
            base_url,
        })
    }

    /// The configured application identifier.
    pub fn application_id(&self) -> &str {
        &self.application_id
    }

    /// Sends one chat-sync request and returns the raw response body.
    async fn chat_sync(
        &self,
        message: &str,
        user_id: Option<&str>,
    ) -> Result<Value, SwitchyardError> {
        let request = ChatSyncRequest {
            application_id: &self.application_id,
            user_message: message,
            user_id,
        };

        let response = self
            .client
            .post(format!("{}/v1/chat-sync", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| SwitchyardError::Search {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, application_id = %self.application_id, "chat-sync response received");

        let body = response.text().await.map_err(|e| SwitchyardError::Search {
            message: format!("failed to read response body: {e}"),
            source: Some(Box::new(e)),
        })?;

        if !status.is_success() {
            return Err(SwitchyardError::Search {
                message: format!("service returned {status}: {body}"),
                source: None,
            });
        }

        serde_json::from_str(&body).map_err(|e| SwitchyardError::Search {
            message: format!("failed to parse service response: {e}"),
            source: Some(Box::new(e)),
        })
    }
}

#[async_trait]
impl EnterpriseSearch for EnterpriseSearchClient {
    async fn chat(
        &self,
        message: &str,
        user_id: Option<&str>,
    ) -> Result<ExternalReply, SwitchyardError> {
        let body = self.chat_sync(message, user_id).await?;
        Ok(ExternalReply::from_value(body))
    }
}
