// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as valid bind addresses and sampling parameter ranges.

use crate::diagnostic::ConfigError;
use crate::model::{SwitchyardConfig, APPLICATION_ID_PLACEHOLDER};

/// Log levels accepted for `agent.log_level`.
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &SwitchyardConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if !LOG_LEVELS.contains(&config.agent.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "agent.log_level `{}` is not one of: {}",
                config.agent.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    let host = config.gateway.host.trim();
    if host.is_empty() {
        errors.push(ConfigError::Validation {
            message: "gateway.host must not be empty".to_string(),
        });
    } else {
        let is_valid_ip = host.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = host
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            errors.push(ConfigError::Validation {
                message: format!("gateway.host `{host}` is not a valid IP address or hostname"),
            });
        }
    }

    if config.reasoning.base_url.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "reasoning.base_url must not be empty".to_string(),
        });
    }

    if config.reasoning.max_tokens == 0 {
        errors.push(ConfigError::Validation {
            message: "reasoning.max_tokens must be at least 1".to_string(),
        });
    }

    if !(0.0..=1.0).contains(&config.reasoning.temperature) {
        errors.push(ConfigError::Validation {
            message: format!(
                "reasoning.temperature must be between 0.0 and 1.0, got {}",
                config.reasoning.temperature
            ),
        });
    }

    // An empty application_id is a misconfiguration; the placeholder is the
    // supported way to leave enterprise search unconfigured.
    if config.enterprise.application_id.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: format!(
                "enterprise.application_id must not be empty (leave it at `{APPLICATION_ID_PLACEHOLDER}` to disable retrieval)"
            ),
        });
    }

    if config.enterprise.application_id != APPLICATION_ID_PLACEHOLDER
        && config.enterprise.base_url.trim().is_empty()
    {
        errors.push(ConfigError::Validation {
            message: "enterprise.base_url must not be empty when enterprise.application_id is set"
                .to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
