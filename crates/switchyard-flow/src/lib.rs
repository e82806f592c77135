// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dispatch flow for the Switchyard query router.
//!
//! This crate wires the routing decision to the two answering paths:
//! - [`RetrievalPath`]: hosted enterprise search, gated on a configured
//!   application identifier
//! - [`ReasoningPath`]: a single multi-step reasoning completion
//! - [`Dispatcher`]: the state machine that runs routing and then exactly
//!   one path, producing the final `{route, answer}` record
//! - [`extract_query`]: request envelope extraction for the boundary

pub mod dispatcher;
pub mod paths;
pub mod request;

pub use dispatcher::Dispatcher;
pub use paths::{ReasoningPath, RetrievalPath, NOT_CONFIGURED_ANSWER};
pub use request::extract_query;
