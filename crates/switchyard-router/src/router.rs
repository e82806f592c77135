// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! LLM-backed routing between enterprise retrieval and multi-step reasoning.
//!
//! One model call with a fixed keyword instruction, one attempt. Any
//! failure (network, service, or malformed output) degrades to the RAG
//! default: retrieval is read-only enterprise search and therefore the
//! lower-risk fallback.

use std::str::FromStr;
use std::sync::Arc;

use switchyard_core::{Query, ReasoningModel, RouteDecision};
use tracing::{error, warn};

/// Decides the downstream path for a query.
pub struct QueryRouter {
    model: Arc<dyn ReasoningModel>,
}

impl QueryRouter {
    /// Create a router backed by the given reasoning model.
    pub fn new(model: Arc<dyn ReasoningModel>) -> Self {
        Self { model }
    }

    /// Decide the route for a query. Infallible by contract: every failure
    /// mode logs and returns [`RouteDecision::Rag`].
    pub async fn decide(&self, query: &Query) -> RouteDecision {
        let prompt = routing_prompt(query.as_str());

        let reply = match self.model.complete(&prompt).await {
            Ok(reply) => reply,
            Err(e) => {
                error!(error = %e, "routing call failed, defaulting to RAG");
                return RouteDecision::Rag;
            }
        };

        let text = reply.into_text();
        match parse_decision(&text) {
            Some(decision) => decision,
            None => {
                warn!(raw = %text, "unexpected routing decision, defaulting to RAG");
                RouteDecision::Rag
            }
        }
    }
}

/// Build the fixed routing instruction for a query.
fn routing_prompt(query: &str) -> String {
    format!(
        "You are a routing agent.\n\
         \n\
         Decide the best route:\n\
         - RAG: If the question needs enterprise documents, policies, FAQs, or knowledge base\n\
         - AGENT: If the question needs reasoning, steps, actions, or orchestration\n\
         \n\
         Respond ONLY with one word: RAG or AGENT\n\
         \n\
         Question:\n\
         {query}"
    )
}

/// Parse a routing decision from model output.
///
/// Only the first whitespace-delimited token matters, case-insensitively;
/// anything else is `None`.
pub fn parse_decision(text: &str) -> Option<RouteDecision> {
    let token = text.split_whitespace().next()?;
    RouteDecision::from_str(token).ok()
}
