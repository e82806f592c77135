// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the Switchyard workspace.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::SwitchyardError;

/// A user query, non-empty by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Query(String);

impl Query {
    /// Create a query, rejecting empty or all-whitespace input.
    pub fn new(text: impl Into<String>) -> Result<Self, SwitchyardError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(SwitchyardError::InvalidRequest(
                "missing or empty query".to_string(),
            ));
        }
        Ok(Self(text))
    }

    /// The query text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The chosen downstream path for a query.
///
/// Wire keywords are "RAG" (enterprise retrieval) and "AGENT" (multi-step
/// reasoning). Parsing is case-insensitive; serialization always uppercases.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum RouteDecision {
    /// Answer via the hosted enterprise-search service.
    Rag,
    /// Answer via a general-purpose reasoning completion.
    Agent,
}

/// The final output of a dispatched request. Created once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    /// The routing decision that selected the answering path.
    pub route: RouteDecision,
    /// The answer text produced by whichever path ran.
    pub answer: String,
}
