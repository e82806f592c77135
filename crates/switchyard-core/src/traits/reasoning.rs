// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait for the reasoning model.

use async_trait::async_trait;

use crate::error::SwitchyardError;
use crate::reply::ExternalReply;

/// A general-purpose reasoning model invoked with a single prompt.
///
/// Implementations hold their own configuration (model identifier,
/// sampling parameters, credentials) and must be safely shareable across
/// concurrent requests without per-request mutation.
#[async_trait]
pub trait ReasoningModel: Send + Sync {
    /// Send one completion request. Exactly one attempt; callers decide
    /// how to degrade on failure.
    async fn complete(&self, prompt: &str) -> Result<ExternalReply, SwitchyardError>;
}
