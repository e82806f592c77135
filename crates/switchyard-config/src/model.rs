// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Switchyard query router.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Placeholder value for an unconfigured enterprise application identifier.
///
/// While `enterprise.application_id` is left at this value, the Retrieval
/// Path short-circuits with a fixed "not configured" answer instead of
/// calling the service.
pub const APPLICATION_ID_PLACEHOLDER: &str = "YOUR_APPLICATION_ID";

/// Top-level Switchyard configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to sensible
/// values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SwitchyardConfig {
    /// Service identity and logging settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Reasoning model (Anthropic Messages API) settings.
    #[serde(default)]
    pub reasoning: ReasoningConfig,

    /// Enterprise-search service settings.
    #[serde(default)]
    pub enterprise: EnterpriseConfig,

    /// HTTP gateway settings.
    #[serde(default)]
    pub gateway: GatewayConfig,
}

/// Service identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name of the service.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_agent_name() -> String {
    "switchyard".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Reasoning model configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ReasoningConfig {
    /// API key for the reasoning model. `None` requires an environment override.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL of the Messages API.
    #[serde(default = "default_reasoning_base_url")]
    pub base_url: String,

    /// Model identifier used for both routing and reasoning calls.
    #[serde(default = "default_model")]
    pub model: String,

    /// Maximum tokens to generate per response.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature. Pinned to 0 by default so routing and
    /// reasoning calls are maximally deterministic.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// API version string.
    #[serde(default = "default_api_version")]
    pub api_version: String,
}

impl Default for ReasoningConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_reasoning_base_url(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            api_version: default_api_version(),
        }
    }
}

fn default_reasoning_base_url() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_model() -> String {
    "claude-sonnet-4-20250514".to_string()
}

fn default_max_tokens() -> u32 {
    1024
}

fn default_temperature() -> f32 {
    0.0
}

fn default_api_version() -> String {
    "2023-06-01".to_string()
}

/// Enterprise-search service configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EnterpriseConfig {
    /// Application identifier for the enterprise-search service.
    ///
    /// Required for the Retrieval Path to function; the placeholder
    /// default short-circuits retrieval with a "not configured" answer.
    #[serde(default = "default_application_id")]
    pub application_id: String,

    /// Optional user identifier. When unset, calls are made anonymously.
    #[serde(default)]
    pub user_id: Option<String>,

    /// Base URL of the chat-sync API.
    #[serde(default = "default_enterprise_base_url")]
    pub base_url: String,

    /// Optional bearer token for the service.
    #[serde(default)]
    pub api_key: Option<String>,
}

impl Default for EnterpriseConfig {
    fn default() -> Self {
        Self {
            application_id: default_application_id(),
            user_id: None,
            base_url: default_enterprise_base_url(),
            api_key: None,
        }
    }
}

fn default_application_id() -> String {
    APPLICATION_ID_PLACEHOLDER.to_string()
}

fn default_enterprise_base_url() -> String {
    "https://qa.example.com".to_string()
}

/// HTTP gateway configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    /// Host address to bind.
    #[serde(default = "default_gateway_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_gateway_port")]
    pub port: u16,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: default_gateway_host(),
            port: default_gateway_port(),
        }
    }
}

fn default_gateway_host() -> String {
    "127.0.0.1".to_string()
}

fn default_gateway_port() -> u16 {
    8080
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = SwitchyardConfig::default();
        assert_eq!(config.agent.name, "switchyard");
        assert_eq!(config.agent.log_level, "info");
        assert_eq!(config.reasoning.temperature, 0.0);
        assert_eq!(config.enterprise.application_id, APPLICATION_ID_PLACEHOLDER);
        assert!(config.enterprise.user_id.is_none());
        assert_eq!(config.gateway.port, 8080);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let toml_str = r#"
[agent]
name = "test"
naem = "typo"
"#;
        assert!(toml::from_str::<SwitchyardConfig>(toml_str).is_err());
    }

    #[test]
    fn partial_sections_fill_defaults() {
        let toml_str = r#"
[enterprise]
application_id = "app-1234"
"#;
        let config: SwitchyardConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.enterprise.application_id, "app-1234");
        assert_eq!(config.enterprise.base_url, "https://qa.example.com");
        assert_eq!(config.reasoning.model, "claude-sonnet-4-20250514");
    }
}
