// Copyright (c) 2025 - Cowboy AI, Inc.
//! Mesos master HTTP client
//!
//! ```text
//! master_state() = GET /mesos/master/state
//! agents()       = GET /mesos/master/slaves  → { "slaves": [ { "id", "domain", .. } ] }
//! ```

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::http::JsonHttp;
use super::{AgentRecord, ClusterController};
use crate::config::ClusterConfig;
use crate::errors::FaultDomainResult;

const STATE_PATH: &str = "/mesos/master/state";
const SLAVES_PATH: &str = "/mesos/master/slaves";

#[derive(Debug, Deserialize)]
struct SlavesResponse {
    #[serde(default)]
    slaves: Vec<AgentRecord>,
}

/// [`ClusterController`] backed by the Mesos master HTTP API
#[derive(Debug, Clone)]
pub struct MesosMasterClient {
    http: JsonHttp,
}

impl MesosMasterClient {
    /// Create a client for the cluster's leading master
    pub fn new(config: &ClusterConfig) -> FaultDomainResult<Self> {
        Ok(Self {
            http: JsonHttp::new(config)?,
        })
    }
}

#[async_trait]
impl ClusterController for MesosMasterClient {
    async fn master_state(&self) -> FaultDomainResult<Value> {
        self.http.get(STATE_PATH).await
    }

    async fn agents(&self) -> FaultDomainResult<Vec<AgentRecord>> {
        let response: SlavesResponse = self.http.get(SLAVES_PATH).await?;
        debug!("Mesos master listed {} agents", response.slaves.len());
        Ok(response.slaves)
    }
}
