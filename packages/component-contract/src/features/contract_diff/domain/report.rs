//! Diff outcome and the persisted diff report

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::dom_paths::DomPathDictionary;
use super::grouping::GroupedChanges;
use super::summary::DiffSummary;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffResult {
    pub changes: GroupedChanges,
    pub summary: DiffSummary,
    pub dom_path_dictionary: DomPathDictionary,
}

impl DiffResult {
    pub fn is_empty(&self) -> bool {
        self.summary.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffReport {
    /// Label of the older contract (stored path or generation time)
    pub before: String,
    pub after: String,
    pub component_name: String,
    pub timestamp: DateTime<Utc>,
    pub dom_path_dictionary: DomPathDictionary,
    pub changes: GroupedChanges,
    pub summary: DiffSummary,
}

impl DiffReport {
    pub fn new(
        before: impl Into<String>,
        after: impl Into<String>,
        component_name: impl Into<String>,
        result: DiffResult,
    ) -> Self {
        Self {
            before: before.into(),
            after: after.into(),
            component_name: component_name.into(),
            timestamp: Utc::now(),
            dom_path_dictionary: result.dom_path_dictionary,
            changes: result.changes,
            summary: result.summary,
        }
    }
}
