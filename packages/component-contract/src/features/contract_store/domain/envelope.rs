//! Persisted contract envelope
//!
//! `{contract, hash, metadata: {sourcePaths, timestamp, name}}`. Readers
//! also accept a bare contract document.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::models::Contract;

pub const CONTRACT_FILE_SUFFIX: &str = ".contract.json";
pub const REPORT_FILE_SUFFIX: &str = ".diff.json";
const FILE_TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredMetadata {
    #[serde(default)]
    pub source_paths: Vec<String>,
    pub timestamp: DateTime<Utc>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredContract {
    pub contract: Contract,
    pub hash: String,
    pub metadata: StoredMetadata,
}

impl StoredContract {
    pub fn wrap(contract: Contract, source_paths: Vec<String>) -> Self {
        let metadata = StoredMetadata {
            source_paths,
            timestamp: contract.meta.generated_at,
            name: contract.meta.name.clone(),
        };
        Self {
            hash: contract.meta.content_hash.clone(),
            contract,
            metadata,
        }
    }
}

/// Listing entry for one stored contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractSummary {
    pub name: String,
    pub path: PathBuf,
    pub timestamp: DateTime<Utc>,
    pub hash: String,
}

/// `<name>-<YYYYMMDDTHHMMSS><suffix>`; `attempt` 2 and up appends `-<attempt>`
/// before the suffix
pub fn stored_file_name(
    name: &str,
    timestamp: &DateTime<Utc>,
    suffix: &str,
    attempt: usize,
) -> String {
    let stem = format!("{}-{}", sanitize_name(name), timestamp.format(FILE_TIMESTAMP_FORMAT));
    if attempt > 1 {
        format!("{}-{}{}", stem, attempt, suffix)
    } else {
        format!("{}{}", stem, suffix)
    }
}

fn sanitize_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '-' })
        .collect();
    if cleaned.is_empty() {
        "component".to_string()
    } else {
        cleaned
    }
}
