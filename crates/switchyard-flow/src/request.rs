// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Request envelope extraction.
//!
//! The query may arrive under a direct `query` key, a short `q` key, or
//! nested inside a textual `body` field that itself JSON-decodes to an
//! object with a `query` key (the shape an HTTP front door forwards).
//! Empty and all-whitespace candidates are treated as absent so a later
//! key can still supply the query.

use serde_json::Value;
use switchyard_core::Query;

/// Extract the query from a request envelope. `None` means the request is
/// a client error: no usable query under any recognized key.
pub fn extract_query(event: &Value) -> Option<Query> {
    for key in ["query", "q"] {
        if let Some(query) = string_field(event, key) {
            return Some(query);
        }
    }

    if let Some(Value::String(body)) = event.get("body")
        && let Ok(decoded) = serde_json::from_str::<Value>(body)
    {
        return string_field(&decoded, "query");
    }

    None
}

fn string_field(value: &Value, key: &str) -> Option<Query> {
    match value.get(key) {
        Some(Value::String(s)) => Query::new(s.as_str()).ok(),
        _ => None,
    }
}
