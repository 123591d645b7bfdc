// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for fault domain queries

use thiserror::Error;

/// Errors that can occur while querying cluster fault domains
///
/// Malformed domain configuration is never reported here; it degrades to the
/// `"default"` region/zone instead (see [`crate::domain::FaultDomain::from_config`]).
#[derive(Debug, Error)]
pub enum FaultDomainError {
    /// The cluster controller could not be reached or answered with a failure
    #[error("Cluster controller unavailable: {0}")]
    ControllerUnavailable(String),

    /// An application without tasks was passed to a per-application query
    #[error("App {app_id} did not launch any tasks")]
    EmptyTaskSet { app_id: String },

    /// A task references an agent that is missing from the agent listing
    #[error("App {app_id} has a task on unknown agent {agent_id}")]
    UnknownNode { app_id: String, agent_id: String },

    /// A JSON resource could not be read from a file or URL
    #[error("{0}")]
    ResourceUnavailable(String),

    /// Deserialization error
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for fault domain operations
pub type FaultDomainResult<T> = Result<T, FaultDomainError>;

impl From<serde_json::Error> for FaultDomainError {
    fn from(err: serde_json::Error) -> Self {
        FaultDomainError::Deserialization(err.to_string())
    }
}

impl From<reqwest::Error> for FaultDomainError {
    fn from(err: reqwest::Error) -> Self {
        FaultDomainError::ControllerUnavailable(err.to_string())
    }
}
