// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Anthropic Messages API request and error types.
//!
//! Successful response bodies are deliberately kept as raw JSON and handed
//! to the response normalizer, which tolerates the shape variations the
//! API exhibits across versions.

use serde::{Deserialize, Serialize};

/// A request to the Messages API.
#[derive(Debug, Clone, Serialize)]
pub struct MessageRequest {
    /// Model identifier.
    pub model: String,
    /// Conversation messages (a single user turn for this system).
    pub messages: Vec<ApiMessage>,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
    /// Sampling temperature (0 for deterministic output).
    pub temperature: f32,
}

/// A single message in a Messages API request.
#[derive(Debug, Clone, Serialize)]
pub struct ApiMessage {
    /// Message role ("user" or "assistant").
    pub role: String,
    /// Message text.
    pub content: String,
}

impl ApiMessage {
    /// Build a user-role message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Error envelope returned by the API on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

/// Error detail within an [`ApiErrorResponse`].
#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    /// Error type (e.g., "invalid_request_error").
    #[serde(rename = "type")]
    pub type_: String,
    /// Human-readable error message.
    pub message: String,
}
