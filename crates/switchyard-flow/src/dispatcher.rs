// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The dispatch flow: route once, run exactly one answering path.
//!
//! Modeled as an explicit state machine so the transition structure is
//! checkable: `Start -> Routing -> (Retrieval | Reasoning) -> Done`, with
//! the branch chosen by an exhaustive match on [`RouteDecision`]. Routing
//! and branch failures never escape the flow (each component degrades
//! internally); the only error the dispatcher itself can produce is a
//! broken orchestration invariant.

use switchyard_core::{AnswerRecord, Query, RouteDecision, SwitchyardError};
use switchyard_router::QueryRouter;
use tracing::info;

use crate::paths::{ReasoningPath, RetrievalPath};

/// States of the dispatch flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FlowState {
    Start,
    Routing,
    Retrieval,
    Reasoning,
    Done,
}

/// Runs the full route-then-answer flow for one query.
///
/// Holds stateless shared handles only; a single dispatcher is safely
/// shareable across concurrent requests.
pub struct Dispatcher {
    router: QueryRouter,
    retrieval: RetrievalPath,
    reasoning: ReasoningPath,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher").finish_non_exhaustive()
    }
}

impl Dispatcher {
    /// Assemble the flow from its three components.
    pub fn new(router: QueryRouter, retrieval: RetrievalPath, reasoning: ReasoningPath) -> Self {
        Self {
            router,
            retrieval,
            reasoning,
        }
    }

    /// Dispatch one query: decide the route, run that path, produce the
    /// final record.
    ///
    /// At most two outbound calls in strict sequence (the routing call,
    /// then exactly one branch call). The `Err` case is reserved for
    /// orchestration invariant violations and is surfaced by the gateway
    /// as a generic execution failure.
    pub async fn dispatch(&self, query: &Query) -> Result<AnswerRecord, SwitchyardError> {
        let mut state = FlowState::Start;
        let mut route: Option<RouteDecision> = None;
        let mut answer: Option<String> = None;

        loop {
            state = match state {
                FlowState::Start => FlowState::Routing,
                FlowState::Routing => {
                    let decision = self.router.decide(query).await;
                    info!(route = %decision, "routing decision");
                    route = Some(decision);
                    match decision {
                        RouteDecision::Rag => FlowState::Retrieval,
                        RouteDecision::Agent => FlowState::Reasoning,
                    }
                }
                FlowState::Retrieval => {
                    answer = Some(self.retrieval.answer(query).await);
                    FlowState::Done
                }
                FlowState::Reasoning => {
                    answer = Some(self.reasoning.answer(query).await);
                    FlowState::Done
                }
                FlowState::Done => break,
            };
        }

        let route = route.ok_or_else(|| {
            SwitchyardError::Internal("flow reached Done without a routing decision".to_string())
        })?;
        let answer = answer.ok_or_else(|| {
            SwitchyardError::Internal("flow reached Done without an answer".to_string())
        })?;

        Ok(AnswerRecord { route, answer })
    }
}
