// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Switchyard query router.

use thiserror::Error;

/// The primary error type used across the Switchyard workspace.
#[derive(Debug, Error)]
pub enum SwitchyardError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// The inbound request is missing a usable query.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Reasoning model errors (HTTP failure, API error response, unparseable body).
    #[error("reasoning model error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Enterprise search errors (HTTP failure, API error response, unparseable body).
    #[error("enterprise search error: {message}")]
    Search {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Gateway errors (bind failure, server failure).
    #[error("gateway error: {message}")]
    Gateway {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors (broken flow invariants).
    #[error("internal error: {0}")]
    Internal(String),
}
