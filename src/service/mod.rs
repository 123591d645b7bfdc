// Copyright (c) 2025 - Cowboy AI, Inc.
//! Service Layer for Fault Domain Queries
//!
//! Couples a [`crate::controller::ClusterController`] with the pure queries
//! in [`crate::query`].
//!
//! # Example
//!
//! ```rust,no_run
//! use cim_fault_domains::controller::MesosMasterClient;
//! use cim_fault_domains::domain::DomainFilter;
//! use cim_fault_domains::service::FaultDomainAggregator;
//! use cim_fault_domains::ClusterConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClusterConfig::from_env()?;
//!     let aggregator = FaultDomainAggregator::new(MesosMasterClient::new(&config)?);
//!
//!     let (region, zones) = aggregator.biggest_region().await?;
//!     let agents = aggregator
//!         .count_nodes(&DomainFilter::any().with_regions(region.clone()))
//!         .await?;
//!     println!("{:?} has zones {:?} and {} agents", region, zones, agents);
//!
//!     Ok(())
//! }
//! ```

pub mod aggregator;

pub use aggregator::FaultDomainAggregator;
