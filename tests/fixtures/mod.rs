// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for cim-fault-domains
//!
//! - [`FakeController`]: in-memory [`ClusterController`] with a fixed agent list
//! - [`FakeCluster`]: minimal HTTP server answering fixed JSON per path, used
//!   to exercise the reqwest-based clients
//! - Agent and domain builders with deterministic ids

#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use cim_fault_domains::{AgentRecord, ClusterController, FaultDomainError, FaultDomainResult};

/// Raw Mesos `domain` blob for a region/zone
pub fn domain_blob(region: &str, zone: &str) -> Value {
    json!({
        "fault_domain": {
            "region": { "name": region },
            "zone": { "name": zone }
        }
    })
}

/// Agent with a configured fault domain
pub fn agent(id: &str, region: &str, zone: &str) -> AgentRecord {
    AgentRecord::new(id, Some(domain_blob(region, zone)))
}

/// Six agents over two regions: `us-east` (3 zones) and `us-west` (2 zones)
pub fn two_region_agents() -> Vec<AgentRecord> {
    vec![
        agent("S0", "us-east", "us-east-1a"),
        agent("S1", "us-east", "us-east-1b"),
        agent("S2", "us-east", "us-east-1c"),
        agent("S3", "us-east", "us-east-1a"),
        agent("S4", "us-west", "us-west-2a"),
        agent("S5", "us-west", "us-west-2b"),
    ]
}

/// In-memory cluster controller
pub struct FakeController {
    master: Value,
    agents: Mutex<Vec<AgentRecord>>,
    unavailable: bool,
}

impl FakeController {
    pub fn new(agents: Vec<AgentRecord>) -> Self {
        Self {
            master: json!({ "hostname": "master-0" }),
            agents: Mutex::new(agents),
            unavailable: false,
        }
    }

    /// Controller that fails every call
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::new(Vec::new())
        }
    }

    pub fn with_master_domain(mut self, region: &str, zone: &str) -> Self {
        self.master = json!({
            "hostname": "master-0",
            "domain": domain_blob(region, zone)
        });
        self
    }

    /// Replace the agent list, as if agents joined or left
    pub fn set_agents(&self, agents: Vec<AgentRecord>) {
        *self.agents.lock().unwrap() = agents;
    }

    fn check_available(&self) -> FaultDomainResult<()> {
        if self.unavailable {
            Err(FaultDomainError::ControllerUnavailable(
                "connection refused".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ClusterController for FakeController {
    async fn master_state(&self) -> FaultDomainResult<Value> {
        self.check_available()?;
        Ok(self.master.clone())
    }

    async fn agents(&self) -> FaultDomainResult<Vec<AgentRecord>> {
        self.check_available()?;
        Ok(self.agents.lock().unwrap().clone())
    }
}

/// A canned HTTP response
#[derive(Debug, Clone)]
pub struct Route {
    pub status: u16,
    pub body: String,
}

impl Route {
    pub fn json(body: Value) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

/// Minimal HTTP/1.1 server answering canned responses keyed by request target
pub struct FakeCluster {
    pub url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FakeCluster {
    /// Start serving `routes`; unknown paths answer 404
    pub async fn start(routes: Vec<(&str, Route)>) -> Self {
        let routes: Arc<HashMap<String, Route>> = Arc::new(
            routes
                .into_iter()
                .map(|(path, route)| (path.to_string(), route))
                .collect(),
        );
        let requests = Arc::new(Mutex::new(Vec::new()));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());

        let seen = requests.clone();
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let routes = routes.clone();
                let seen = seen.clone();
                tokio::spawn(async move {
                    let request = read_head(&mut socket).await;
                    let target = request.split_whitespace().nth(1).unwrap_or("/").to_string();
                    seen.lock().unwrap().push(request);

                    let route = routes
                        .get(&target)
                        .cloned()
                        .unwrap_or_else(|| Route::status(404, "not found"));
                    let response = format!(
                        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        route.status,
                        if route.status == 200 { "OK" } else { "Error" },
                        route.body.len(),
                        route.body
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        Self { url, requests }
    }

    /// Raw request heads received so far
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

async fn read_head(socket: &mut tokio::net::TcpStream) -> String {
    let mut head = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.unwrap_or(0);
        if n == 0 {
            break;
        }
        head.extend_from_slice(&chunk[..n]);
        if head.windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
    }
    String::from_utf8_lossy(&head).into_owned()
}

/// URL of a local server that accepts connections but never answers
///
/// Sockets are held open until the test's runtime shuts down.
pub async fn silent_server_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());

    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    url
}

/// URL of a local port nothing listens on
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
