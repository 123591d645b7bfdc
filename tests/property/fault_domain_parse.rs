// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for the FaultDomain defaulting parse

use cim_fault_domains::domain::{FaultDomain, DEFAULT_NAME};
use proptest::prelude::*;
use serde_json::{json, Value};

/// Arbitrary JSON values, nested a few levels deep
fn any_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::from),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::from),
            prop::collection::btree_map(
                prop_oneof![
                    Just("fault_domain".to_string()),
                    Just("region".to_string()),
                    Just("zone".to_string()),
                    Just("name".to_string()),
                    "[a-z]{1,6}",
                ],
                inner,
                0..4
            )
            .prop_map(|map| Value::Object(map.into_iter().collect())),
        ]
    })
}

/// Optional `{"name": ..}` level
fn level(name: Option<String>) -> Value {
    match name {
        Some(name) => json!({ "name": name }),
        None => json!({}),
    }
}

proptest! {
    /// Property: The parse never fails and never yields empty names
    #[test]
    fn prop_parse_is_total(config in any_json()) {
        let domain = FaultDomain::from_config(&config);

        prop_assert!(!domain.region().is_empty());
        prop_assert!(!domain.zone().is_empty());
    }

    /// Property: Present names are kept, missing names become the default
    #[test]
    fn prop_missing_fields_default(
        region in proptest::option::of("[a-z0-9-]{1,12}"),
        zone in proptest::option::of("[a-z0-9-]{1,12}"),
    ) {
        let config = json!({
            "fault_domain": {
                "region": level(region.clone()),
                "zone": level(zone.clone()),
            }
        });

        let domain = FaultDomain::from_config(&config);

        prop_assert_eq!(domain.region(), region.as_deref().unwrap_or(DEFAULT_NAME));
        prop_assert_eq!(domain.zone(), zone.as_deref().unwrap_or(DEFAULT_NAME));
    }
}
