//! Declared `inputs` / `outputs` metadata lists
//!
//! Entries are `name` or `name: alias`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredIo {
    #[serde(default)]
    pub inputs: Vec<String>,
    #[serde(default)]
    pub outputs: Vec<String>,
}

impl DeclaredIo {
    pub fn new<I, O>(inputs: I, outputs: O) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        O: IntoIterator,
        O::Item: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            outputs: outputs.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty() && self.outputs.is_empty()
    }
}

/// Split a declared entry into `(name, alias)`
pub fn split_declared(entry: &str) -> Option<(&str, Option<&str>)> {
    let (name, alias) = match entry.split_once(':') {
        Some((name, alias)) => (name.trim(), Some(alias.trim()).filter(|a| !a.is_empty())),
        None => (entry.trim(), None),
    };
    (!name.is_empty()).then_some((name, alias))
}
