// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Response normalization for shape-varying external replies.
//!
//! The reasoning model and the enterprise-search service return JSON whose
//! answer text may live under several different keys, inside an array of
//! content blocks, or inside a nested message list. [`ExternalReply`]
//! classifies a raw reply into one of the known shapes so callers get a
//! plain text answer without probing fields themselves.

use serde_json::Value;

/// Candidate answer fields, checked in priority order.
const CANDIDATE_FIELDS: &[&str] = &["content", "systemMessage", "message", "response"];

/// Fields probed on the first element of an array-valued reply.
const NESTED_TEXT_FIELDS: &[&str] = &["text", "content", "message"];

/// A classified external reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExternalReply {
    /// A candidate field held the answer as a plain string.
    Direct(String),
    /// The answer was recovered from the first element of a message or
    /// content-block array.
    Threaded(String),
    /// No known shape matched; the raw value serializes as the answer.
    Unrecognized(Value),
}

impl ExternalReply {
    /// Classify a raw reply value.
    pub fn from_value(value: Value) -> Self {
        if let Some(obj) = value.as_object() {
            for field in CANDIDATE_FIELDS {
                match obj.get(*field) {
                    Some(Value::String(s)) if !s.trim().is_empty() => {
                        return Self::Direct(s.clone());
                    }
                    Some(Value::Array(items)) => {
                        if let Some(text) = first_element_text(items) {
                            return Self::Threaded(text);
                        }
                    }
                    _ => {}
                }
            }
            if let Some(Value::Array(items)) = obj.get("messages")
                && let Some(text) = first_element_text(items)
            {
                return Self::Threaded(text);
            }
        }
        if let Value::String(s) = &value
            && !s.trim().is_empty()
        {
            return Self::Direct(s.clone());
        }
        Self::Unrecognized(value)
    }

    /// Extract the answer text. Total: never fails, never empty for
    /// non-null input (the fallback serializes the whole reply).
    pub fn into_text(self) -> String {
        match self {
            Self::Direct(text) | Self::Threaded(text) => text,
            Self::Unrecognized(value) => value.to_string(),
        }
    }
}

/// Probe the first element of an array for a text-bearing field.
fn first_element_text(items: &[Value]) -> Option<String> {
    let obj = items.first()?.as_object()?;
    NESTED_TEXT_FIELDS.iter().find_map(|field| match obj.get(*field) {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn direct_content_field_wins() {
        let reply = ExternalReply::from_value(json!({"content": "hello"}));
        assert_eq!(reply, ExternalReply::Direct("hello".to_string()));
    }

    #[test]
    fn system_message_field() {
        let reply = ExternalReply::from_value(json!({"systemMessage": "hello"}));
        assert_eq!(reply.into_text(), "hello");
    }

    #[test]
    fn field_priority_order() {
        // "content" outranks "systemMessage" even when both are present.
        let reply = ExternalReply::from_value(json!({
            "systemMessage": "second",
            "content": "first",
        }));
        assert_eq!(reply.into_text(), "first");
    }

    #[test]
    fn nested_message_list() {
        let reply = ExternalReply::from_value(json!({"messages": [{"content": "hi"}]}));
        assert_eq!(reply, ExternalReply::Threaded("hi".to_string()));
    }

    #[test]
    fn anthropic_content_blocks() {
        let reply = ExternalReply::from_value(json!({
            "content": [{"type": "text", "text": "block text"}],
            "model": "claude-sonnet-4-20250514",
        }));
        assert_eq!(reply, ExternalReply::Threaded("block text".to_string()));
    }

    #[test]
    fn bare_string_reply() {
        let reply = ExternalReply::from_value(json!("just text"));
        assert_eq!(reply.into_text(), "just text");
    }

    #[test]
    fn empty_candidate_fields_are_skipped() {
        let reply = ExternalReply::from_value(json!({
            "content": "",
            "message": "fallback answer",
        }));
        assert_eq!(reply.into_text(), "fallback answer");
    }

    #[test]
    fn unrecognized_shape_serializes_generically() {
        let value = json!({"unexpected": {"deeply": ["nested"]}});
        let reply = ExternalReply::from_value(value.clone());
        assert_eq!(reply, ExternalReply::Unrecognized(value));
        let text = reply.into_text();
        assert!(!text.is_empty());
        assert!(text.contains("unexpected"));
    }

    #[test]
    fn empty_object_never_yields_empty_text() {
        let text = ExternalReply::from_value(json!({})).into_text();
        assert!(!text.is_empty());
    }

    #[test]
    fn empty_messages_array_falls_through() {
        let text = ExternalReply::from_value(json!({"messages": []})).into_text();
        assert!(!text.is_empty());
    }
}
