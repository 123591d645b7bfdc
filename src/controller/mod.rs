// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cluster Controller Access
//!
//! The aggregator never reaches into global state for cluster access; it is
//! handed a [`ClusterController`]. [`MesosMasterClient`] talks to a real
//! Mesos master over HTTP, and tests substitute an in-memory fake.
//!
//! # Example
//!
//! ```rust,no_run
//! use cim_fault_domains::controller::{ClusterController, MesosMasterClient};
//! use cim_fault_domains::ClusterConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let master = MesosMasterClient::new(&ClusterConfig::from_env()?)?;
//!
//!     for agent in master.agents().await? {
//!         println!("{} -> {:?}", agent.id, agent.domain);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod http;
pub mod marathon;
pub mod mesos;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::errors::FaultDomainResult;

pub use marathon::MarathonClient;
pub use mesos::MesosMasterClient;

/// A worker node as listed by the controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentRecord {
    /// Agent id
    pub id: String,

    /// Raw `domain` blob, absent when the agent has no fault domain configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<Value>,
}

impl AgentRecord {
    /// Create an agent record
    pub fn new(id: impl Into<String>, domain: Option<Value>) -> Self {
        Self {
            id: id.into(),
            domain,
        }
    }
}

/// Read access to the cluster control plane
///
/// Implementations perform one request per call and report transport
/// failures as [`crate::FaultDomainError::ControllerUnavailable`]. They must
/// not retry.
#[async_trait]
pub trait ClusterController: Send + Sync {
    /// The controller's own state; may carry a `domain` field
    async fn master_state(&self) -> FaultDomainResult<Value>;

    /// All worker nodes currently registered
    async fn agents(&self) -> FaultDomainResult<Vec<AgentRecord>>;
}

#[async_trait]
impl<C: ClusterController + ?Sized> ClusterController for Arc<C> {
    async fn master_state(&self) -> FaultDomainResult<Value> {
        (**self).master_state().await
    }

    async fn agents(&self) -> FaultDomainResult<Vec<AgentRecord>> {
        (**self).agents().await
    }
}
