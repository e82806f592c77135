// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scripted mock adapters for deterministic testing.
//!
//! [`MockReasoningModel`] and [`MockEnterpriseSearch`] implement the core
//! adapter traits with pre-configured FIFO replies and call counters,
//! enabling fast, CI-runnable tests without external API calls.

pub mod mock_reasoning;
pub mod mock_search;

pub use mock_reasoning::MockReasoningModel;
pub use mock_search::MockEnterpriseSearch;

use serde_json::Value;

/// A pre-configured reply for a mock adapter, popped FIFO.
#[derive(Debug, Clone)]
pub enum ScriptedReply {
    /// A plain text answer, wrapped in the adapter's natural reply field.
    Text(String),
    /// A raw JSON reply body, handed to the normalizer as-is.
    Raw(Value),
    /// A simulated invocation failure with the given message.
    Error(String),
}

impl ScriptedReply {
    /// Shorthand for a text reply.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Shorthand for a failure reply.
    pub fn error(s: impl Into<String>) -> Self {
        Self::Error(s.into())
    }
}
