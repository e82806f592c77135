// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter traits for the external services the router depends on.

pub mod reasoning;
pub mod search;

pub use reasoning::ReasoningModel;
pub use search::EnterpriseSearch;
