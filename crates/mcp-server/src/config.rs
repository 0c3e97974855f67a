//! Process configuration, read once at startup.

use aisearch_backend::{RestBackendConfig, DEFAULT_API_VERSION, DEFAULT_TIMEOUT};
use aisearch_tool_groups::{GroupSelection, DEFAULT_SELECTION};
use std::time::Duration;
use thiserror::Error;

pub const TOOL_GROUPS_ENV: &str = "AZURE_AI_SEARCH_MCP_TOOL_GROUPS";
pub const ENDPOINT_ENV: &str = "AZURE_AI_SEARCH_ENDPOINT";
pub const API_KEY_ENV: &str = "AZURE_AI_SEARCH_API_KEY";
pub const API_VERSION_ENV: &str = "AZURE_AI_SEARCH_API_VERSION";
pub const AUTH_METHOD_ENV: &str = "AZURE_AUTHENTICATION_METHOD";
pub const TIMEOUT_SECS_ENV: &str = "AZURE_AI_SEARCH_TIMEOUT_SECS";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("AZURE_AUTHENTICATION_METHOD='{0}' is invalid; must be one of api-search-key or service-principal")]
    InvalidAuthMethod(String),

    #[error("AZURE_AUTHENTICATION_METHOD=service-principal is not supported by this server; use api-search-key")]
    UnsupportedAuthMethod,

    #[error("AZURE_AI_SEARCH_TIMEOUT_SECS='{0}' is not a positive number of seconds")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMethod {
    ApiKey,
    ServicePrincipal,
}

impl AuthMethod {
    fn parse(raw: &str) -> Result<Self, ConfigError> {
        match raw.trim() {
            "api-search-key" => Ok(AuthMethod::ApiKey),
            "service-principal" => Ok(AuthMethod::ServicePrincipal),
            other => Err(ConfigError::InvalidAuthMethod(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Groups whose tools are advertised during discovery.
    pub tool_groups: GroupSelection,
    pub backend: RestBackendConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let tool_groups = tool_groups_from_lookup(&lookup);

        let auth = lookup(AUTH_METHOD_ENV)
            .map(|raw| AuthMethod::parse(&raw))
            .transpose()?
            .unwrap_or(AuthMethod::ApiKey);
        if auth == AuthMethod::ServicePrincipal {
            return Err(ConfigError::UnsupportedAuthMethod);
        }

        let endpoint = non_empty(lookup(ENDPOINT_ENV)).ok_or(ConfigError::Missing(ENDPOINT_ENV))?;
        let api_version =
            non_empty(lookup(API_VERSION_ENV)).unwrap_or_else(|| DEFAULT_API_VERSION.to_string());
        let timeout = match non_empty(lookup(TIMEOUT_SECS_ENV)) {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            tool_groups,
            backend: RestBackendConfig {
                endpoint,
                api_key: non_empty(lookup(API_KEY_ENV)),
                api_version,
                timeout,
            },
        })
    }
}

/// An unset tool-group variable means `ALL`; a set but blank one selects nothing.
pub fn tool_groups_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> GroupSelection {
    let raw = lookup(TOOL_GROUPS_ENV).unwrap_or_else(|| DEFAULT_SELECTION.to_string());
    GroupSelection::parse(&raw)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
