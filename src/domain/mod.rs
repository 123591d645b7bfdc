// Copyright (c) 2025 - Cowboy AI, Inc.
//! Fault Domain Models
//!
//! Value objects describing where cluster nodes and application tasks live.
//!
//! - [`FaultDomain`] - region/zone pair, never empty, defaults to `"default"`
//! - [`DomainFilter`] - optional region and zone constraints, combined with AND
//! - [`AppDescriptor`] / [`TaskRecord`] - Marathon app and the agents its tasks run on

pub mod application;
pub mod fault_domain;
pub mod filter;

pub use application::{AppDescriptor, TaskRecord};
pub use fault_domain::{FaultDomain, DEFAULT_NAME};
pub use filter::DomainFilter;
