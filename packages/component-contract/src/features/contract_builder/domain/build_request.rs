//! Inputs of one contract build

use std::path::{Path, PathBuf};

use crate::features::interface_extraction::domain::DeclaredIo;

/// Where a component's sources live
///
/// Template and style paths override the locations discovered from the
/// component metadata; `declared` feeds degraded interface extraction when
/// the class source cannot be parsed.
#[derive(Debug, Clone, Default)]
pub struct BuildRequest {
    pub class_path: PathBuf,
    pub template_path: Option<PathBuf>,
    pub style_paths: Vec<PathBuf>,
    pub declared: DeclaredIo,
    pub name: Option<String>,
}

impl BuildRequest {
    pub fn new(class_path: impl AsRef<Path>) -> Self {
        Self {
            class_path: class_path.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    pub fn with_template(mut self, path: impl AsRef<Path>) -> Self {
        self.template_path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_style(mut self, path: impl AsRef<Path>) -> Self {
        self.style_paths.push(path.as_ref().to_path_buf());
        self
    }

    pub fn with_declared(mut self, declared: DeclaredIo) -> Self {
        self.declared = declared;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Directory relative metadata URLs resolve against
    pub fn base_dir(&self) -> &Path {
        self.class_path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Fallback component name: the class file stem up to the first `.`
    pub fn fallback_name(&self) -> String {
        self.class_path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| n.split('.').next())
            .unwrap_or_default()
            .to_string()
    }
}
