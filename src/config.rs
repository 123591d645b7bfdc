// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cluster connection configuration

use serde::{Deserialize, Serialize};

use crate::errors::{FaultDomainError, FaultDomainResult};

/// Configuration for talking to a DC/OS cluster
///
/// The Mesos master is reached under `{dcos_url}/mesos` and Marathon under
/// `{dcos_url}/service/marathon`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterConfig {
    /// Cluster base URL (e.g., "https://dcos.example.com")
    pub dcos_url: String,

    /// ACS token, sent as `Authorization: token=<acs_token>`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acs_token: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_timeout() -> u64 {
    30
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            dcos_url: "http://leader.mesos".to_string(),
            acs_token: None,
            timeout_secs: default_timeout(),
        }
    }
}

impl ClusterConfig {
    /// Create a configuration for the given cluster URL
    pub fn new(dcos_url: impl Into<String>) -> Self {
        Self {
            dcos_url: dcos_url.into(),
            ..Self::default()
        }
    }

    /// Set the ACS token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.acs_token = Some(token.into());
        self
    }

    /// Load configuration from environment variables
    ///
    /// - `DCOS_URL` (required)
    /// - `DCOS_ACS_TOKEN` (optional)
    /// - `DCOS_TIMEOUT_SECS` (optional, defaults to 30)
    pub fn from_env() -> FaultDomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> FaultDomainResult<Self> {
        let dcos_url = lookup("DCOS_URL")
            .filter(|url| !url.is_empty())
            .ok_or_else(|| FaultDomainError::Configuration("DCOS_URL not set".to_string()))?;

        let acs_token = lookup("DCOS_ACS_TOKEN").filter(|token| !token.is_empty());

        let timeout_secs = match lookup("DCOS_TIMEOUT_SECS") {
            Some(raw) => raw.parse().map_err(|e| {
                FaultDomainError::Configuration(format!(
                    "DCOS_TIMEOUT_SECS must be a number of seconds, got {:?}: {}",
                    raw, e
                ))
            })?,
            None => default_timeout(),
        };

        Ok(Self {
            dcos_url,
            acs_token,
            timeout_secs,
        })
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.dcos_url.trim_end_matches('/')
    }
}
