// Copyright (c) 2025 - Cowboy AI, Inc.
//! Fault domain helpers for end-to-end tests of DC/OS clusters
//!
//! Fetches region/zone metadata from the Mesos master, maps agent ids to
//! their fault domains and answers the questions fault domain tests ask:
//! which regions and zones exist, which region is biggest, how many agents
//! sit in a region/zone, and which domains an app's tasks landed in.

pub mod config;
pub mod controller;
pub mod domain;
pub mod errors;
pub mod ids;
pub mod query;
pub mod resource;
pub mod service;

// Re-export commonly used types
pub use config::ClusterConfig;
pub use controller::{AgentRecord, ClusterController, MarathonClient, MesosMasterClient};
pub use domain::{AppDescriptor, DomainFilter, FaultDomain, TaskRecord};
pub use errors::{FaultDomainError, FaultDomainResult};
pub use ids::{make_id, make_id_in};
pub use query::{NodeDomainMap, RegionZoneIndex};
pub use resource::{load_resource, load_resource_with};
pub use service::FaultDomainAggregator;
