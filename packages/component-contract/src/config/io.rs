//! Configuration I/O (YAML loading)
//!
//! Defines the YAML schema types. Loading and export live in contract_config.rs.

use super::contract_config::{DiffConfig, ExtractionConfig, StorageConfig};
use serde::{Deserialize, Serialize};

/// Top-level sections accepted in a v1 file
pub const KNOWN_SECTIONS: &[&str] = &["version", "extraction", "diff", "storage"];

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version (always 1 for v1)
    pub version: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extraction: Option<ExtractionConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diff: Option<DiffConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageConfig>,
}
