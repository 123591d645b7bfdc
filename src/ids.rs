// Copyright (c) 2025 - Cowboy AI, Inc.
//! Unique Marathon ids for test apps and groups

use uuid::Uuid;

/// Default parent group for generated ids
pub const ROOT_GROUP: &str = "/";

/// Unique id under the root group
///
/// ```rust
/// use cim_fault_domains::make_id;
///
/// let id = make_id(Some("sleep"));
/// assert!(id.starts_with("/sleep-"));
/// assert_eq!(id.len(), "/sleep-".len() + 32);
/// ```
pub fn make_id(prefix: Option<&str>) -> String {
    make_id_in(prefix, ROOT_GROUP)
}

/// Unique id `{prefix}-{hex}` (or bare `{hex}`) under `parent_group`
pub fn make_id_in(prefix: Option<&str>, parent_group: &str) -> String {
    let hex = Uuid::new_v4().simple().to_string();
    let app_id = match prefix {
        Some(prefix) if !prefix.is_empty() => format!("{}-{}", prefix, hex),
        _ => hex,
    };

    join_group(parent_group, &app_id)
}

fn join_group(parent_group: &str, app_id: &str) -> String {
    if parent_group.is_empty() {
        app_id.to_string()
    } else if parent_group.ends_with('/') {
        format!("{}{}", parent_group, app_id)
    } else {
        format!("{}/{}", parent_group, app_id)
    }
}
