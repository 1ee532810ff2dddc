//! Contract: immutable structural snapshot of one component

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::element::{ElementKey, StructuralElement};
use super::public_api::PublicInterface;
use super::slot::SlotDescriptor;
use super::style::StyleSheetContract;

/// Top-level contract sections, in serialization order
pub const CONTRACT_SECTIONS: &[&str] = &["meta", "publicApi", "slots", "dom", "styles"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractMeta {
    pub name: String,
    /// Root selector the component is registered under
    pub root_selector: String,
    pub source_file: String,
    /// Declaration kind (`component`, `directive`)
    pub kind: String,
    pub generated_at: DateTime<Utc>,
    /// SHA-256 over the raw class, template and style sources
    pub content_hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub meta: ContractMeta,
    pub public_api: PublicInterface,
    #[serde(default)]
    pub slots: BTreeMap<String, SlotDescriptor>,
    #[serde(default)]
    pub dom: BTreeMap<ElementKey, StructuralElement>,
    pub styles: StyleSheetContract,
}

impl Contract {
    /// Generic JSON tree used by diffing and querying
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    /// Equal hashes imply structurally identical contracts
    pub fn same_sources(&self, other: &Contract) -> bool {
        self.meta.content_hash == other.meta.content_hash
    }
}
