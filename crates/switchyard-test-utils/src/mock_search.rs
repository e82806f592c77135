// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock enterprise-search service with scripted replies.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use switchyard_core::{EnterpriseSearch, ExternalReply, SwitchyardError};
use tokio::sync::Mutex;

use crate::ScriptedReply;

/// A mock enterprise-search service that returns pre-configured replies.
///
/// Mirrors [`crate::MockReasoningModel`]: FIFO replies, a default text when
/// the queue is empty, and a call counter. Additionally records the
/// `user_id` of the most recent call so tests can assert anonymous access.
pub struct MockEnterpriseSearch {
    replies: Arc<Mutex<VecDeque<ScriptedReply>>>,
    calls: AtomicUsize,
    last_user_id: Arc<Mutex<Option<String>>>,
}

impl MockEnterpriseSearch {
    /// Create a mock with an empty reply queue.
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::new())),
            calls: AtomicUsize::new(0),
            last_user_id: Arc::new(Mutex::new(None)),
        }
    }

    /// Create a mock pre-loaded with the given replies.
    pub fn with_replies(replies: Vec<ScriptedReply>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::from(replies))),
            calls: AtomicUsize::new(0),
            last_user_id: Arc::new(Mutex::new(None)),
        }
    }

    /// Add a reply to the end of the queue.
    pub async fn add_reply(&self, reply: ScriptedReply) {
        self.replies.lock().await.push_back(reply);
    }

    /// Number of `chat` calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The `user_id` passed to the most recent `chat` call.
    pub async fn last_user_id(&self) -> Option<String> {
        self.last_user_id.lock().await.clone()
    }

    async fn next_reply(&self) -> ScriptedReply {
        self.replies
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| ScriptedReply::text("mock answer"))
    }
}

impl Default for MockEnterpriseSearch {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EnterpriseSearch for MockEnterpriseSearch {
    async fn chat(
        &self,
        _message: &str,
        user_id: Option<&str>,
    ) -> Result<ExternalReply, SwitchyardError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_user_id.lock().await = user_id.map(str::to_string);
        match self.next_reply().await {
            ScriptedReply::Text(text) => {
                Ok(ExternalReply::from_value(json!({"systemMessage": text})))
            }
            ScriptedReply::Raw(value) => Ok(ExternalReply::from_value(value)),
            ScriptedReply::Error(message) => Err(SwitchyardError::Search {
                message,
                source: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_last_user_id() {
        let search = MockEnterpriseSearch::new();
        search.chat("q", Some("alice")).await.unwrap();
        assert_eq!(search.last_user_id().await.as_deref(), Some("alice"));

        search.chat("q", None).await.unwrap();
        assert!(search.last_user_id().await.is_none());
        assert_eq!(search.call_count(), 2);
    }

    #[tokio::test]
    async fn scripted_error_is_returned() {
        let search =
            MockEnterpriseSearch::with_replies(vec![ScriptedReply::error("service down")]);
        let err = search.chat("q", None).await.unwrap_err().to_string();
        assert!(err.contains("service down"));
    }
}
