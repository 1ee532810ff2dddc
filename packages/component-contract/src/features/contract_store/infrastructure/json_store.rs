//! File-based contract store (JSON)

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::StorageConfig;
use crate::errors::{ContractError, Result};
use crate::features::contract_diff::domain::DiffReport;
use crate::features::contract_store::domain::{
    stored_file_name, ContractSummary, StoredContract, CONTRACT_FILE_SUFFIX, REPORT_FILE_SUFFIX,
};
use crate::shared::models::Contract;

#[derive(Debug, Clone)]
pub struct ContractStore {
    root_dir: PathBuf,
    pretty: bool,
}

impl ContractStore {
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            pretty: true,
        }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self {
            root_dir: PathBuf::from(&config.contracts_dir),
            pretty: config.pretty,
        }
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Save a contract wrapped in the envelope; returns the written path.
    /// Existing files are never overwritten.
    pub fn save(&self, contract: &Contract, source_paths: Vec<String>) -> Result<PathBuf> {
        let stored = StoredContract::wrap(contract.clone(), source_paths);
        let path = self.write_new_json(
            &contract.meta.name,
            &contract.meta.generated_at,
            CONTRACT_FILE_SUFFIX,
            &stored,
        )?;
        info!(path = %path.display(), name = %contract.meta.name, "contract saved");
        Ok(path)
    }

    pub fn save_report(&self, report: &DiffReport) -> Result<PathBuf> {
        let path = self.write_new_json(
            &report.component_name,
            &report.timestamp,
            REPORT_FILE_SUFFIX,
            report,
        )?;
        info!(path = %path.display(), total = report.summary.total, "diff report saved");
        Ok(path)
    }

    pub fn load(&self, path: impl AsRef<Path>) -> Result<Contract> {
        load_contract(self.resolve(path.as_ref()))
    }

    pub fn load_report(&self, path: impl AsRef<Path>) -> Result<DiffReport> {
        let path = self.resolve(path.as_ref());
        let content = fs::read_to_string(&path).map_err(|_| ContractError::missing(&path))?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Stored contracts under the root directory, newest first
    pub fn list(&self) -> Result<Vec<ContractSummary>> {
        list_contracts(&self.root_dir)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() || path.exists() {
            path.to_path_buf()
        } else {
            self.root_dir.join(path)
        }
    }

    /// Write to the first free `stored_file_name` for this name and second
    fn write_new_json<T: Serialize>(
        &self,
        name: &str,
        timestamp: &DateTime<Utc>,
        suffix: &str,
        value: &T,
    ) -> Result<PathBuf> {
        fs::create_dir_all(&self.root_dir)?;
        let content = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };

        let mut attempt = 1;
        loop {
            let path = self
                .root_dir
                .join(stored_file_name(name, timestamp, suffix, attempt));
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(mut file) => {
                    file.write_all(content.as_bytes())?;
                    return Ok(path);
                }
                Err(err) if err.kind() == ErrorKind::AlreadyExists => {
                    debug!(path = %path.display(), "stored file exists; trying next name");
                    attempt += 1;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}

impl Default for ContractStore {
    fn default() -> Self {
        Self::from_config(&StorageConfig::default())
    }
}

/// Load an envelope or a bare contract
pub fn load_contract(path: impl AsRef<Path>) -> Result<Contract> {
    load_stored(path.as_ref()).map(|stored| stored.contract)
}

fn load_stored(path: &Path) -> Result<StoredContract> {
    let content = fs::read_to_string(path).map_err(|_| ContractError::missing(path))?;
    let value: Value = serde_json::from_str(&content)
        .map_err(|err| ContractError::malformed(path, format!("invalid JSON: {}", err)))?;

    if value.get("contract").is_some() {
        debug!(path = %path.display(), "loading contract envelope");
        return serde_json::from_value(value)
            .map_err(|err| ContractError::malformed(path, format!("bad envelope: {}", err)));
    }

    let contract: Contract = serde_json::from_value(value).map_err(|err| {
        ContractError::malformed(
            path,
            format!("neither an envelope nor a contract: {}", err),
        )
    })?;
    debug!(path = %path.display(), "loaded bare contract");
    Ok(StoredContract::wrap(contract, Vec::new()))
}

/// Walk `dir` for `*.contract.json` files; unreadable entries are skipped
pub fn list_contracts(dir: impl AsRef<Path>) -> Result<Vec<ContractSummary>> {
    let dir = dir.as_ref();
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut summaries = Vec::new();
    for entry in WalkDir::new(dir).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %err, "skipping unreadable entry");
                continue;
            }
        };
        let is_contract = entry.file_type().is_file()
            && entry
                .file_name()
                .to_str()
                .map(|n| n.ends_with(CONTRACT_FILE_SUFFIX))
                .unwrap_or(false);
        if !is_contract {
            continue;
        }
        match load_stored(entry.path()) {
            Ok(stored) => summaries.push(ContractSummary {
                name: stored.metadata.name,
                path: entry.path().to_path_buf(),
                timestamp: stored.metadata.timestamp,
                hash: stored.hash,
            }),
            Err(err) => warn!(path = %entry.path().display(), error = %err, "skipping stored contract"),
        }
    }

    summaries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then_with(|| a.path.cmp(&b.path)));
    debug!(dir = %dir.display(), count = summaries.len(), "stored contracts listed");
    Ok(summaries)
}
