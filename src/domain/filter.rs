// Copyright (c) 2025 - Cowboy AI, Inc.
//! Region/zone filter for node selection

use super::FaultDomain;

/// Conjunctive filter over fault domains
///
/// Each side is optional on its own. A domain matches when
/// (no region constraint OR its region is listed) AND
/// (no zone constraint OR its zone is listed). An explicitly empty list
/// matches nothing.
///
/// # Examples
///
/// ```rust
/// use cim_fault_domains::domain::{DomainFilter, FaultDomain};
///
/// let filter = DomainFilter::region("r1").with_zones(["z1", "z2"]);
/// assert!(filter.matches(&FaultDomain::new("r1", "z2")));
/// assert!(!filter.matches(&FaultDomain::new("r2", "z1")));
/// assert!(DomainFilter::any().matches(&FaultDomain::default()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainFilter {
    regions: Option<Vec<String>>,
    zones: Option<Vec<String>>,
}

impl DomainFilter {
    /// Filter that matches every domain
    pub fn any() -> Self {
        Self::default()
    }

    /// Filter on a single region
    pub fn region(region: impl Into<String>) -> Self {
        Self::any().with_regions([region])
    }

    /// Filter on a single zone
    pub fn zone(zone: impl Into<String>) -> Self {
        Self::any().with_zones([zone])
    }

    /// Restrict to the given regions
    pub fn with_regions<I, S>(mut self, regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.regions = Some(regions.into_iter().map(Into::into).collect());
        self
    }

    /// Restrict to the given zones
    pub fn with_zones<I, S>(mut self, zones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.zones = Some(zones.into_iter().map(Into::into).collect());
        self
    }

    /// Region constraint, if any
    pub fn regions(&self) -> Option<&[String]> {
        self.regions.as_deref()
    }

    /// Zone constraint, if any
    pub fn zones(&self) -> Option<&[String]> {
        self.zones.as_deref()
    }

    /// Check a domain against both constraints
    pub fn matches(&self, domain: &FaultDomain) -> bool {
        let region_ok = self
            .regions
            .as_ref()
            .map_or(true, |regions| regions.iter().any(|r| r == domain.region()));
        let zone_ok = self
            .zones
            .as_ref()
            .map_or(true, |zones| zones.iter().any(|z| z == domain.zone()));

        region_ok && zone_ok
    }
}
