// Copyright (c) 2025 - Cowboy AI, Inc.
//! FaultDomainAggregator
//!
//! Each query makes exactly one controller call, then hands the result to a
//! pure function from [`crate::query`]:
//!
//! ```text
//! query → controller.agents() → NodeDomainMap → pure query → answer
//! ```
//!
//! Nothing is cached between calls, so every answer reflects the cluster at
//! the time of the call.

use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::controller::ClusterController;
use crate::domain::{AppDescriptor, DomainFilter, FaultDomain};
use crate::errors::FaultDomainResult;
use crate::query::{self, NodeDomainMap, RegionZoneIndex};

/// Fault domain queries over a cluster controller
#[derive(Debug, Clone)]
pub struct FaultDomainAggregator<C> {
    controller: C,
}

impl<C: ClusterController> FaultDomainAggregator<C> {
    /// Create an aggregator over the given controller
    pub fn new(controller: C) -> Self {
        Self { controller }
    }

    /// The underlying controller
    pub fn controller(&self) -> &C {
        &self.controller
    }

    /// Agent id → fault domain for every registered agent
    pub async fn collect_node_domains(&self) -> FaultDomainResult<NodeDomainMap> {
        let agents = self.controller.agents().await?;

        let domains: NodeDomainMap = agents
            .into_iter()
            .map(|agent| {
                let domain = FaultDomain::from_optional_config(agent.domain.as_ref());
                (agent.id, domain)
            })
            .collect();

        debug!("Collected fault domains for {} agents", domains.len());
        Ok(domains)
    }

    /// Fault domain of the controller itself (the cluster "local domain")
    pub async fn cluster_domain(&self) -> FaultDomainResult<FaultDomain> {
        let state = self.controller.master_state().await?;
        let domain = FaultDomain::from_optional_config(
            state.as_object().and_then(|state| state.get("domain")),
        );

        debug!("Cluster local domain is {}", domain);
        Ok(domain)
    }

    /// All regions in the cluster with their zones
    pub async fn all_regions(&self) -> FaultDomainResult<RegionZoneIndex> {
        let domains = self.collect_node_domains().await?;
        Ok(query::index_regions(&domains))
    }

    /// Region with the most zones, and its zones
    pub async fn biggest_region(&self) -> FaultDomainResult<(Option<String>, Vec<String>)> {
        let index = self.all_regions().await?;
        let (region, zones) = query::largest_region(&index);

        info!(
            "Biggest region is {} with {} zones",
            region.as_deref().unwrap_or("<none>"),
            zones.len()
        );
        Ok((region, zones))
    }

    /// Fault domains used by the tasks of `app`
    pub async fn app_domains(&self, app: &AppDescriptor) -> FaultDomainResult<BTreeSet<FaultDomain>> {
        let domains = self.collect_node_domains().await?;
        let used = query::domains_for_app(app, &domains)?;

        debug!("App {} spans {} fault domains", app.id, used.len());
        Ok(used)
    }

    /// Regions and zones used by the tasks of `app`
    pub async fn app_regions_and_zones(
        &self,
        app: &AppDescriptor,
    ) -> FaultDomainResult<(BTreeSet<String>, BTreeSet<String>)> {
        let used = self.app_domains(app).await?;
        Ok(query::split_regions_and_zones(&used))
    }

    /// Ids of the agents matching `filter`
    pub async fn nodes_in(&self, filter: &DomainFilter) -> FaultDomainResult<Vec<String>> {
        let domains = self.collect_node_domains().await?;
        Ok(query::nodes_matching(&domains, filter))
    }

    /// Number of agents matching `filter`
    pub async fn count_nodes(&self, filter: &DomainFilter) -> FaultDomainResult<usize> {
        let domains = self.collect_node_domains().await?;
        let count = query::count_matching(&domains, filter);

        debug!(
            "{} agents match regions {:?} zones {:?}",
            count,
            filter.regions(),
            filter.zones()
        );
        Ok(count)
    }
}
