// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock reasoning model with scripted replies.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use switchyard_core::{ExternalReply, ReasoningModel, SwitchyardError};
use tokio::sync::Mutex;

use crate::ScriptedReply;

/// A mock reasoning model that returns pre-configured replies.
///
/// Replies are popped from a FIFO queue. When the queue is empty, a
/// default "mock reply" text is returned. Every call increments a counter
/// so tests can assert how often (or that never) the model was invoked.
pub struct MockReasoningModel {
    replies: Arc<Mutex<VecDeque<ScriptedReply>>>,
    calls: AtomicUsize,
}

impl MockReasoningModel {
    /// Create a mock with an empty reply queue.
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::new())),
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a mock pre-loaded with the given replies.
    pub fn with_replies(replies: Vec<ScriptedReply>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::from(replies))),
            calls: AtomicUsize::new(0),
        }
    }

    /// Add a reply to the end of the queue.
    pub async fn add_reply(&self, reply: ScriptedReply) {
        self.replies.lock().await.push_back(reply);
    }

    /// Number of `complete` calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn next_reply(&self) -> ScriptedReply {
        self.replies
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| ScriptedReply::text("mock reply"))
    }
}

impl Default for MockReasoningModel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReasoningModel for MockReasoningModel {
    async fn complete(&self, _prompt: &str) -> Result<ExternalReply, SwitchyardError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.next_reply().await {
            ScriptedReply::Text(text) => Ok(ExternalReply::from_value(json!({"content": text}))),
            ScriptedReply::Raw(value) => Ok(ExternalReply::from_value(value)),
            ScriptedReply::Error(message) => Err(SwitchyardError::Provider {
                message,
                source: None,
            }),
        }
    }
}
