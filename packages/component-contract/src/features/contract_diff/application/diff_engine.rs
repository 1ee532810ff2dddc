//! Diff Engine
//!
//! Runs the diff pipeline over two contracts. Equal content hashes are not
//! short-circuited here; see `ContractDiffUseCase::is_unchanged`.

use std::collections::BTreeSet;

use tracing::debug;

use crate::config::DiffConfig;
use crate::errors::Result;
use crate::features::contract_diff::domain::{
    consolidate, dedupe_dom_paths, diff_values, group_changes, ConsolidationOptions,
    DiffResult, DiffSummary, DomPathDictionary,
};
use crate::shared::models::{Contract, ElementKey};

#[derive(Debug, Clone, Default)]
pub struct ContractDiffer {
    config: DiffConfig,
}

impl ContractDiffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DiffConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DiffConfig {
        &self.config
    }

    pub fn diff(&self, before: &Contract, after: &Contract) -> Result<DiffResult> {
        let old = before.to_value()?;
        let new = after.to_value()?;

        let records = diff_values(&old, &new);
        let raw = records.len();
        let records = consolidate(
            records,
            ConsolidationOptions {
                consolidate_style_rules: self.config.consolidate_style_rules,
                prune_nested_removals: self.config.prune_nested_removals,
            },
        );

        let mut changes = group_changes(records);
        let dom_path_dictionary = if self.config.dedupe_dom_paths {
            let known: BTreeSet<ElementKey> =
                before.dom.keys().chain(after.dom.keys()).cloned().collect();
            dedupe_dom_paths(&mut changes, &known)
        } else {
            DomPathDictionary::default()
        };
        let summary = DiffSummary::from_groups(&changes);

        debug!(
            component = %after.meta.name,
            raw_changes = raw,
            total = summary.total,
            aliases = dom_path_dictionary.len(),
            "contracts diffed"
        );

        Ok(DiffResult {
            changes,
            summary,
            dom_path_dictionary,
        })
    }
}
