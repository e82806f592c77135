// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for the Switchyard query router.
//!
//! The gateway exposes the dispatch flow over REST. Each request is
//! extracted, dispatched down exactly one answering path, and returned as
//! a `{route, answer}` record.

pub mod handlers;
pub mod server;

pub use server::{app, start_server, GatewayState, ServerConfig};
