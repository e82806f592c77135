// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hosted enterprise-QA chat-sync client for the Switchyard query router.
//!
//! Implements [`switchyard_core::EnterpriseSearch`] over HTTP with reqwest.

pub mod client;

pub use client::EnterpriseSearchClient;
