//! Client configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default Web API host
pub const DEFAULT_API_HOST: &str = "https://slack.com/api";

/// Default per-request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration
///
/// Construct directly, via the chained setters, or from the
/// environment. The token is the only mandatory piece; it is sent as
/// the `token` field of every request and never mutated by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// API token (bot or user token)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Web API host. Tests point this at a local mock server.
    #[serde(default = "default_api_host")]
    pub api_host: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_host() -> String {
    DEFAULT_API_HOST.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Config {
    /// Create a configuration with the given API token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..Self::default()
        }
    }

    /// Build a configuration from `SLACK_TOKEN` and `SLACK_API_HOST`.
    pub fn from_env() -> Self {
        Self {
            token: std::env::var("SLACK_TOKEN").ok(),
            api_host: std::env::var("SLACK_API_HOST").unwrap_or_else(|_| default_api_host()),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Override the Web API host.
    pub fn api_host(mut self, host: impl Into<String>) -> Self {
        self.api_host = host.into();
        self
    }

    /// Override the per-request timeout.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Per-request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate that required configuration is present.
    pub fn validate_auth(&self) -> Result<()> {
        match &self.token {
            Some(token) if !token.is_empty() => Ok(()),
            _ => Err(ConfigError::MissingToken.into()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token: None,
            api_host: default_api_host(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
