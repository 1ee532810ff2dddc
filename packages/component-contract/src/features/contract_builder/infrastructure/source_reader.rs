//! Source file access for contract builds

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::{ContractError, Result};

/// A source artifact and the path it was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    pub path: PathBuf,
    pub text: String,
}

impl SourceText {
    pub fn new(path: impl AsRef<Path>, text: impl Into<String>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            text: text.into(),
        }
    }

    pub fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

/// Read a required source; any failure is a `MissingInput` naming the path
pub fn read_source(path: &Path) -> Result<SourceText> {
    let text = fs::read_to_string(path).map_err(|err| {
        debug!(path = %path.display(), error = %err, "source unreadable");
        ContractError::missing(path)
    })?;
    Ok(SourceText::new(path, text))
}

/// Resolve a metadata URL (`./card.component.html`) against the class directory
pub fn resolve_url(base_dir: &Path, url: &str) -> PathBuf {
    let url = url.trim();
    let relative = url.strip_prefix("./").unwrap_or(url);
    base_dir.join(relative)
}
