// Copyright (c) 2025 - Cowboy AI, Inc.
//! Fault Domain Report
//!
//! Prints the fault domain layout of a DC/OS cluster: the master's local
//! domain, every region with its zones, the biggest region and agent counts.
//! Agents are listed once and every figure is computed from that snapshot.
//!
//! Run with: cargo run --bin fault-domain-report
//!
//! Environment:
//! 1. `DCOS_URL` - cluster base URL (required)
//! 2. `DCOS_ACS_TOKEN` - ACS token (optional)
//! 3. `REPORT_APP_ID` - Marathon app whose task placement should be reported (optional)

use anyhow::{Context, Result};
use cim_fault_domains::query;
use cim_fault_domains::{
    ClusterConfig, DomainFilter, FaultDomainAggregator, MarathonClient, MesosMasterClient,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = ClusterConfig::from_env().context("Failed to load cluster configuration")?;
    info!("Reporting fault domains of {}", config.base_url());

    let master = MesosMasterClient::new(&config).context("Failed to create Mesos client")?;
    let aggregator = FaultDomainAggregator::new(master);

    let local = aggregator
        .cluster_domain()
        .await
        .context("Failed to query master state")?;
    println!("Local domain: {}", local);

    let domains = aggregator
        .collect_node_domains()
        .await
        .context("Failed to list agents")?;

    let index = query::index_regions(&domains);
    for (region, zones) in index.iter() {
        let agents = query::count_matching(&domains, &DomainFilter::region(region));
        println!("Region {}: {} agents in zones {}", region, agents, zones.join(", "));
    }

    match query::largest_region(&index) {
        (Some(region), zones) => println!("Biggest region: {} ({} zones)", region, zones.len()),
        (None, _) => println!("Biggest region: none (no agents registered)"),
    }

    println!("Total agents: {}", domains.len());

    if let Ok(app_id) = std::env::var("REPORT_APP_ID") {
        let marathon = MarathonClient::new(&config).context("Failed to create Marathon client")?;
        let app = marathon
            .get_app(&app_id)
            .await
            .with_context(|| format!("Failed to fetch app {}", app_id))?;

        let used = query::domains_for_app(&app, &domains)
            .with_context(|| format!("Failed to place tasks of {}", app_id))?;
        let (regions, zones) = query::split_regions_and_zones(&used);
        println!(
            "App {} runs {} tasks in regions {:?} and zones {:?}",
            app.id,
            app.tasks.len(),
            regions,
            zones
        );
    }

    Ok(())
}
