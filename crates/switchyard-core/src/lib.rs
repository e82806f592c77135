// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Switchyard query router.
//!
//! This crate provides the error type, the domain types shared across the
//! workspace (queries, routing decisions, answer records), the response
//! normalizer for shape-varying external replies, and the adapter traits
//! implemented by the external service clients.

pub mod error;
pub mod reply;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::SwitchyardError;
pub use reply::ExternalReply;
pub use traits::{EnterpriseSearch, ReasoningModel};
pub use types::{AnswerRecord, Query, RouteDecision};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_has_all_variants() {
        let _config = SwitchyardError::Config("test".into());
        let _invalid = SwitchyardError::InvalidRequest("test".into());
        let _provider = SwitchyardError::Provider {
            message: "test".into(),
            source: None,
        };
        let _search = SwitchyardError::Search {
            message: "test".into(),
            source: None,
        };
        let _gateway = SwitchyardError::Gateway {
            message: "test".into(),
            source: Some(Box::new(std::io::Error::other("test"))),
        };
        let _internal = SwitchyardError::Internal("test".into());
    }

    #[test]
    fn adapter_traits_are_object_safe() {
        fn _assert_reasoning(_: &dyn ReasoningModel) {}
        fn _assert_search(_: &dyn EnterpriseSearch) {}
    }
}
