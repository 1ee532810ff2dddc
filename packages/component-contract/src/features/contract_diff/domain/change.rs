//! Change records produced by the structural diff

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeType {
    Create,
    Remove,
    Change,
}

impl ChangeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeType::Create => "CREATE",
            ChangeType::Remove => "REMOVE",
            ChangeType::Change => "CHANGE",
        }
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Object key or array index
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Index(usize),
    Key(String),
}

impl PathSegment {
    pub fn key(key: impl Into<String>) -> Self {
        PathSegment::Key(key.into())
    }

    pub fn as_key(&self) -> Option<&str> {
        match self {
            PathSegment::Key(key) => Some(key),
            PathSegment::Index(_) => None,
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => f.write_str(key),
            PathSegment::Index(index) => write!(f, "{}", index),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

pub type ChangePath = Vec<PathSegment>;

/// `path` is a prefix of `other` and strictly shorter
pub fn is_strict_prefix(path: &[PathSegment], other: &[PathSegment]) -> bool {
    path.len() < other.len() && other.starts_with(path)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRecord {
    #[serde(rename = "type")]
    pub change_type: ChangeType,
    pub path: ChangePath,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_value: Option<Value>,
}

impl ChangeRecord {
    pub fn create(path: ChangePath, value: Value) -> Self {
        Self {
            change_type: ChangeType::Create,
            path,
            old_value: None,
            new_value: Some(value),
        }
    }

    pub fn remove(path: ChangePath, old_value: Value) -> Self {
        Self {
            change_type: ChangeType::Remove,
            path,
            old_value: Some(old_value),
            new_value: None,
        }
    }

    pub fn change(path: ChangePath, old_value: Value, new_value: Value) -> Self {
        Self {
            change_type: ChangeType::Change,
            path,
            old_value: Some(old_value),
            new_value: Some(new_value),
        }
    }

    /// Top-level contract section the record belongs to
    pub fn domain(&self) -> Option<&str> {
        self.path.first().and_then(PathSegment::as_key)
    }

    pub fn is_removal(&self) -> bool {
        self.change_type == ChangeType::Remove
    }
}
