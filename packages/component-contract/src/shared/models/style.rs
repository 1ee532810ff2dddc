//! Style rules attached to the component markup

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::element::ElementKey;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleRule {
    pub selector: String,
    /// Declaration name → value; the last declaration of a name wins
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
    /// Elements matched at collection time
    #[serde(default)]
    pub applies_to: Vec<ElementKey>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSheetContract {
    pub source_file: String,
    #[serde(default)]
    pub rules: BTreeMap<String, StyleRule>,
}

impl StyleSheetContract {
    /// Merge `other` into `self`; rules of `other` replace rules with the same selector
    pub fn merge_last_wins(&mut self, other: StyleSheetContract) {
        if self.source_file.is_empty() {
            self.source_file = other.source_file;
        }
        self.rules.extend(other.rules);
    }

    /// Rules that matched no element
    pub fn unused_rules(&self) -> impl Iterator<Item = &StyleRule> {
        self.rules.values().filter(|r| r.applies_to.is_empty())
    }
}
