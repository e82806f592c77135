// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait for the hosted enterprise-search service.

use async_trait::async_trait;

use crate::error::SwitchyardError;
use crate::reply::ExternalReply;

/// A hosted enterprise question-answering service over private documents.
#[async_trait]
pub trait EnterpriseSearch: Send + Sync {
    /// Ask the service one question. When `user_id` is `None` the call is
    /// made anonymously. Exactly one attempt; callers decide how to
    /// degrade on failure.
    async fn chat(
        &self,
        message: &str,
        user_id: Option<&str>,
    ) -> Result<ExternalReply, SwitchyardError>;
}
