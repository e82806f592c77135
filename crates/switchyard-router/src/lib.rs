// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Routing decision logic for the Switchyard query router.
//!
//! [`QueryRouter`] asks the reasoning model to choose between the two
//! downstream paths with a fixed one-word-answer instruction, then parses
//! the first token of the reply. Every failure mode, call error or
//! unrecognized output alike, degrades to the RAG default.

pub mod router;

pub use router::{parse_decision, QueryRouter};
