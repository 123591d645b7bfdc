// Copyright (c) 2025 - Cowboy AI, Inc.
//! FaultDomain Value Object with Defaulting Parse
//!
//! Mesos agents and masters report their placement as a nested `domain` blob:
//!
//! ```text
//! {
//!   "fault_domain": {
//!     "region": { "name": "aws/us-east-1" },
//!     "zone":   { "name": "aws/us-east-1a" }
//!   }
//! }
//! ```
//!
//! Clusters without fault domain configuration omit the blob entirely, or any
//! level of it. Every missing level resolves to [`DEFAULT_NAME`].

use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Region or zone name used whenever the cluster reports none
pub const DEFAULT_NAME: &str = "default";

/// Region/zone placement of a cluster node
///
/// # Invariants
/// - `region` and `zone` are never empty
/// - Equality, hashing and ordering use the `(region, zone)` pair
///
/// # Examples
///
/// ```rust
/// use cim_fault_domains::domain::FaultDomain;
/// use serde_json::json;
///
/// let domain = FaultDomain::from_config(&json!({
///     "fault_domain": {
///         "region": { "name": "us-east-1" },
///         "zone": { "name": "us-east-1a" }
///     }
/// }));
/// assert_eq!(domain.region(), "us-east-1");
/// assert_eq!(domain.zone(), "us-east-1a");
///
/// // Anything that is not a JSON object is treated as empty
/// assert_eq!(FaultDomain::from_config(&json!("garbage")), FaultDomain::default());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct FaultDomain {
    region: String,
    zone: String,
}

impl FaultDomain {
    /// Create a fault domain, substituting [`DEFAULT_NAME`] for empty names
    pub fn new(region: impl Into<String>, zone: impl Into<String>) -> Self {
        Self {
            region: non_empty_or_default(region.into()),
            zone: non_empty_or_default(zone.into()),
        }
    }

    /// Parse a raw `domain` blob
    ///
    /// Lenient: a non-object input is treated as an empty object,
    /// and a missing `fault_domain`, `region`/`zone` or `name` at any level
    /// yields [`DEFAULT_NAME`] for that field. This never fails.
    pub fn from_config(config: &Value) -> Self {
        let fault_domain = config.as_object().and_then(|c| c.get("fault_domain"));

        Self {
            region: named_level(fault_domain, "region"),
            zone: named_level(fault_domain, "zone"),
        }
    }

    /// Parse a `domain` blob that may be absent altogether
    pub fn from_optional_config(config: Option<&Value>) -> Self {
        config.map(Self::from_config).unwrap_or_default()
    }

    /// Region name
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Zone name
    pub fn zone(&self) -> &str {
        &self.zone
    }

    /// True when neither region nor zone was configured
    pub fn is_default(&self) -> bool {
        self.region == DEFAULT_NAME && self.zone == DEFAULT_NAME
    }
}

impl Default for FaultDomain {
    fn default() -> Self {
        Self {
            region: DEFAULT_NAME.to_string(),
            zone: DEFAULT_NAME.to_string(),
        }
    }
}

impl fmt::Display for FaultDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.region, self.zone)
    }
}

/// Resolve `fault_domain.<level>.name`, one explicit absence check per level
fn named_level(fault_domain: Option<&Value>, level: &str) -> String {
    let Some(fault_domain) = fault_domain.and_then(Value::as_object) else {
        return DEFAULT_NAME.to_string();
    };
    let Some(level) = fault_domain.get(level).and_then(Value::as_object) else {
        return DEFAULT_NAME.to_string();
    };
    match level.get("name").and_then(Value::as_str) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => DEFAULT_NAME.to_string(),
    }
}

fn non_empty_or_default(name: String) -> String {
    if name.is_empty() {
        DEFAULT_NAME.to_string()
    } else {
        name
    }
}
