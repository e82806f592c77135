// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Anthropic Messages API client used as the Switchyard reasoning model.
//!
//! Implements [`switchyard_core::ReasoningModel`] over HTTP with reqwest.
//! No streaming and no retries: the router and the reasoning path each make
//! exactly one attempt and degrade locally on failure.

pub mod client;
pub mod types;

pub use client::AnthropicClient;
