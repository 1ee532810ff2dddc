//! Public interface of a component class

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Input-like or plain public property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyContract {
    #[serde(rename = "type")]
    pub type_name: String,
    pub is_input: bool,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<String>,
}

impl PropertyContract {
    pub fn input(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            is_input: true,
            required: false,
            alias: None,
            default_value: None,
            transform: None,
        }
    }
}

/// Output-like member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventContract {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterContract {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub optional: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodContract {
    pub parameters: Vec<ParameterContract>,
    pub return_type: String,
    pub is_static: bool,
    pub is_async: bool,
}

/// Import binding of the component file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportContract {
    pub name: String,
    pub origin_path: String,
}

/// Normalised public interface
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicInterface {
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyContract>,
    #[serde(default)]
    pub events: BTreeMap<String, EventContract>,
    #[serde(default)]
    pub methods: BTreeMap<String, MethodContract>,
    #[serde(default)]
    pub lifecycle: BTreeSet<String>,
    #[serde(default)]
    pub imports: Vec<ImportContract>,
}
