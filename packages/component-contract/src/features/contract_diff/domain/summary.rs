//! Diff summary: totals by type and by domain

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::change::ChangeType;
use super::grouping::GroupedChanges;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffSummary {
    pub total: usize,
    pub by_type: BTreeMap<ChangeType, usize>,
    pub by_domain: BTreeMap<String, BTreeMap<ChangeType, usize>>,
}

impl DiffSummary {
    pub fn from_groups(groups: &GroupedChanges) -> Self {
        let mut summary = DiffSummary::default();
        for (domain, by_type) in groups {
            for (change_type, changes) in by_type {
                let n = changes.len();
                summary.total += n;
                *summary.by_type.entry(*change_type).or_default() += n;
                *summary
                    .by_domain
                    .entry(domain.clone())
                    .or_default()
                    .entry(*change_type)
                    .or_default() += n;
            }
        }
        summary
    }

    pub fn count(&self, change_type: ChangeType) -> usize {
        self.by_type.get(&change_type).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// One-line description, e.g. `3 changes (1 CREATE, 2 REMOVE)`
    pub fn describe(&self) -> String {
        if self.is_empty() {
            return "No changes".to_string();
        }
        let parts: Vec<String> = self
            .by_type
            .iter()
            .map(|(t, n)| format!("{} {}", n, t))
            .collect();
        let noun = if self.total == 1 { "change" } else { "changes" };
        format!("{} {} ({})", self.total, noun, parts.join(", "))
    }
}
