// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure Fault Domain Queries
//!
//! Every function here is pure: it takes an already collected
//! [`NodeDomainMap`] (or values derived from it) and computes an answer
//! without I/O. [`crate::service::FaultDomainAggregator`] performs the single
//! controller round trip and then delegates to these functions.
//!
//! ```text
//! ClusterController ──agents()──> NodeDomainMap ──index_regions()──> RegionZoneIndex
//!                                      │                                  │
//!                                      ├── nodes_matching()               └── largest_region()
//!                                      └── domains_for_app() ──> split_regions_and_zones()
//! ```

use std::collections::BTreeSet;
use std::ops::Index;

use crate::domain::{AppDescriptor, DomainFilter, FaultDomain};
use crate::errors::{FaultDomainError, FaultDomainResult};

/// Agent id → fault domain, in the order the controller listed the agents
///
/// Listing order is what "first seen" means for [`index_regions`] and thus
/// for the tie-break in [`largest_region`]. Equality ignores order: two maps
/// are equal when they hold the same ids with the same domains.
#[derive(Debug, Clone, Default)]
pub struct NodeDomainMap {
    entries: Vec<(String, FaultDomain)>,
}

impl NodeDomainMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the domain of an agent
    ///
    /// A known id keeps its original position; the previous domain is returned.
    pub fn insert(&mut self, id: impl Into<String>, domain: FaultDomain) -> Option<FaultDomain> {
        let id = id.into();
        match self.entries.iter_mut().find(|(known, _)| *known == id) {
            Some((_, existing)) => Some(std::mem::replace(existing, domain)),
            None => {
                self.entries.push((id, domain));
                None
            }
        }
    }

    /// Domain of an agent, if the agent is known
    pub fn get(&self, id: &str) -> Option<&FaultDomain> {
        self.entries
            .iter()
            .find(|(known, _)| known == id)
            .map(|(_, domain)| domain)
    }

    /// True when the agent is known
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Iterate agents and their domains in listing order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FaultDomain)> {
        self.entries.iter().map(|(id, domain)| (id.as_str(), domain))
    }

    /// Agent ids in listing order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    /// Domains in listing order
    pub fn values(&self) -> impl Iterator<Item = &FaultDomain> {
        self.entries.iter().map(|(_, domain)| domain)
    }

    /// Number of agents
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no agent is known
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for NodeDomainMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(id, domain)| other.get(id) == Some(domain))
    }
}

impl Eq for NodeDomainMap {}

impl<S: Into<String>> FromIterator<(S, FaultDomain)> for NodeDomainMap {
    fn from_iter<I: IntoIterator<Item = (S, FaultDomain)>>(entries: I) -> Self {
        let mut map = Self::new();
        for (id, domain) in entries {
            map.insert(id, domain);
        }
        map
    }
}

impl Index<&str> for NodeDomainMap {
    type Output = FaultDomain;

    fn index(&self, id: &str) -> &FaultDomain {
        self.get(id)
            .unwrap_or_else(|| panic!("unknown agent id {}", id))
    }
}

/// Region → distinct zones observed in it
///
/// Regions keep the order in which they were first seen, and so do the zones
/// within a region. A region is only ever created together with its first
/// zone, so no region has an empty zone list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionZoneIndex {
    entries: Vec<(String, Vec<String>)>,
}

impl RegionZoneIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `zone` exists in `region`
    pub fn insert(&mut self, region: &str, zone: &str) {
        match self.entries.iter_mut().find(|(name, _)| name == region) {
            Some((_, zones)) => {
                if !zones.iter().any(|z| z == zone) {
                    zones.push(zone.to_string());
                }
            }
            None => self
                .entries
                .push((region.to_string(), vec![zone.to_string()])),
        }
    }

    /// Zones of a region, if the region is known
    pub fn zones(&self, region: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| name == region)
            .map(|(_, zones)| zones.as_slice())
    }

    /// Iterate regions and their zones in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(region, zones)| (region.as_str(), zones.as_slice()))
    }

    /// Number of regions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no region was recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> FromIterator<&'a FaultDomain> for RegionZoneIndex {
    fn from_iter<I: IntoIterator<Item = &'a FaultDomain>>(domains: I) -> Self {
        let mut index = Self::new();
        for domain in domains {
            index.insert(domain.region(), domain.zone());
        }
        index
    }
}

/// Group the zones of all agents by region, regions in agent listing order
pub fn index_regions(domains: &NodeDomainMap) -> RegionZoneIndex {
    domains.values().collect()
}

/// Region with the most zones, and those zones
///
/// Only a strictly greater zone count replaces the current candidate, so on
/// a tie the region seen first wins. An empty index yields `(None, [])`.
pub fn largest_region(index: &RegionZoneIndex) -> (Option<String>, Vec<String>) {
    let mut biggest: Option<(&str, &[String])> = None;

    for (region, zones) in index.iter() {
        let current = biggest.map_or(0, |(_, z)| z.len());
        if zones.len() > current {
            biggest = Some((region, zones));
        }
    }

    match biggest {
        Some((region, zones)) => (Some(region.to_string()), zones.to_vec()),
        None => (None, Vec::new()),
    }
}

/// Domains of the agents running an application's tasks
///
/// # Errors
/// - [`FaultDomainError::EmptyTaskSet`] when the app has no tasks
/// - [`FaultDomainError::UnknownNode`] when a task's agent is not in `domains`
pub fn domains_for_app(
    app: &AppDescriptor,
    domains: &NodeDomainMap,
) -> FaultDomainResult<BTreeSet<FaultDomain>> {
    if app.tasks.is_empty() {
        return Err(FaultDomainError::EmptyTaskSet {
            app_id: app.id.clone(),
        });
    }

    let mut used = BTreeSet::new();
    for agent_id in app.agent_ids() {
        let domain = domains
            .get(agent_id)
            .ok_or_else(|| FaultDomainError::UnknownNode {
                app_id: app.id.clone(),
                agent_id: agent_id.to_string(),
            })?;
        used.insert(domain.clone());
    }

    Ok(used)
}

/// Project a set of domains onto its distinct regions and zones
pub fn split_regions_and_zones<'a, I>(domains: I) -> (BTreeSet<String>, BTreeSet<String>)
where
    I: IntoIterator<Item = &'a FaultDomain>,
{
    let mut regions = BTreeSet::new();
    let mut zones = BTreeSet::new();

    for domain in domains {
        regions.insert(domain.region().to_string());
        zones.insert(domain.zone().to_string());
    }

    (regions, zones)
}

/// Ids of the agents whose domain passes `filter`
pub fn nodes_matching(domains: &NodeDomainMap, filter: &DomainFilter) -> Vec<String> {
    domains
        .iter()
        .filter(|(_, domain)| filter.matches(domain))
        .map(|(id, _)| id.to_string())
        .collect()
}

/// Number of agents whose domain passes `filter`
pub fn count_matching(domains: &NodeDomainMap, filter: &DomainFilter) -> usize {
    domains.values().filter(|domain| filter.matches(domain)).count()
}
