//! Contract Diff UseCase

use std::path::Path;

use tracing::info;

use crate::config::DiffConfig;
use crate::errors::Result;
use crate::features::contract_diff::application::diff_engine::ContractDiffer;
use crate::features::contract_diff::domain::{DiffReport, DiffResult};
use crate::features::contract_store::load_contract;
use crate::shared::models::Contract;

#[derive(Debug, Clone, Default)]
pub struct ContractDiffUseCase {
    differ: ContractDiffer,
}

impl ContractDiffUseCase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DiffConfig) -> Self {
        Self {
            differ: ContractDiffer::with_config(config),
        }
    }

    /// Equal content hashes: the sources, and so the contracts, are identical
    pub fn is_unchanged(&self, before: &Contract, after: &Contract) -> bool {
        before.same_sources(after)
    }

    pub fn diff(&self, before: &Contract, after: &Contract) -> Result<DiffResult> {
        self.differ.diff(before, after)
    }

    /// Report labelled with each contract's generation time
    pub fn report(&self, before: &Contract, after: &Contract) -> Result<DiffReport> {
        let result = self.differ.diff(before, after)?;
        let report = DiffReport::new(
            before.meta.generated_at.to_rfc3339(),
            after.meta.generated_at.to_rfc3339(),
            after.meta.name.clone(),
            result,
        );
        info!(
            component = %report.component_name,
            summary = %report.summary.describe(),
            "diff report ready"
        );
        Ok(report)
    }

    /// Diff two stored contracts; the report is labelled with their paths
    pub fn diff_files(&self, before: &Path, after: &Path) -> Result<DiffReport> {
        let old = load_contract(before)?;
        let new = load_contract(after)?;
        let result = self.differ.diff(&old, &new)?;
        let report = DiffReport::new(
            before.display().to_string(),
            after.display().to_string(),
            new.meta.name.clone(),
            result,
        );
        info!(
            before = %report.before,
            after = %report.after,
            summary = %report.summary.describe(),
            "stored contracts diffed"
        );
        Ok(report)
    }
}
