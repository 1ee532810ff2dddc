//! Grouping of change records by domain and type
//!
//! The domain (top-level contract section) is dropped from each path; a
//! record's type becomes its grouping key.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::change::{ChangePath, ChangeRecord, ChangeType};

/// Domain name used for records whose path has no section key
pub const ROOT_DOMAIN: &str = "root";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedChange {
    pub path: ChangePath,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_value: Option<Value>,
}

/// domain → type → changes
pub type GroupedChanges = BTreeMap<String, BTreeMap<ChangeType, Vec<GroupedChange>>>;

pub fn group_changes(records: Vec<ChangeRecord>) -> GroupedChanges {
    let mut groups = GroupedChanges::new();
    for record in records {
        let (domain, path) = match record.domain() {
            Some(domain) => (domain.to_string(), record.path[1..].to_vec()),
            None => (ROOT_DOMAIN.to_string(), record.path.clone()),
        };
        groups
            .entry(domain)
            .or_default()
            .entry(record.change_type)
            .or_default()
            .push(GroupedChange {
                path,
                old_value: record.old_value,
                new_value: record.new_value,
            });
    }
    groups
}

/// Number of grouped changes
pub fn grouped_len(groups: &GroupedChanges) -> usize {
    groups
        .values()
        .flat_map(|by_type| by_type.values())
        .map(Vec::len)
        .sum()
}
