//! Contract engine configuration
//!
//! Defaults reproduce the canonical contract format; a YAML file may override
//! individual sections.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use super::io::{ConfigExportV1, KNOWN_SECTIONS};

/// Separator used between ancestor tokens of an element key
pub const DEFAULT_KEY_SEPARATOR: &str = " > ";

/// Markup extraction settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractionConfig {
    pub key_separator: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            key_separator: DEFAULT_KEY_SEPARATOR.to_string(),
        }
    }
}

/// Diff post-processing switches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiffConfig {
    /// Fold multiple `styles.rules.<selector>` removals into one record
    pub consolidate_style_rules: bool,
    /// Drop removals nested under another removal
    pub prune_nested_removals: bool,
    /// Replace element keys in `dom` paths with dictionary aliases
    pub dedupe_dom_paths: bool,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            consolidate_style_rules: true,
            prune_nested_removals: true,
            dedupe_dom_paths: true,
        }
    }
}

/// Contract persistence settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorageConfig {
    pub contracts_dir: String,
    pub pretty: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            contracts_dir: ".contracts".to_string(),
            pretty: true,
        }
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContractConfig {
    pub extraction: ExtractionConfig,
    pub diff: DiffConfig,
    pub storage: StorageConfig,
}

impl ContractConfig {
    /// Load from a YAML file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load from YAML text
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        // Report misspelled sections with a suggestion before serde rejects them.
        let raw: serde_yaml::Value = serde_yaml::from_str(content)?;
        if let serde_yaml::Value::Mapping(map) = &raw {
            for key in map.keys() {
                if let Some(section) = key.as_str() {
                    if !KNOWN_SECTIONS.contains(&section) {
                        return Err(ConfigError::unknown_section_with_suggestion(
                            section,
                            &KNOWN_SECTIONS[1..],
                        ));
                    }
                }
            }
        }

        let export: ConfigExportV1 = serde_yaml::from_value(raw)?;
        if export.version != 1 {
            return Err(ConfigError::UnsupportedVersion {
                found: export.version,
                supported: vec![1],
            });
        }

        let config = Self {
            extraction: export.extraction.unwrap_or_default(),
            diff: export.diff.unwrap_or_default(),
            storage: export.storage.unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Export as YAML v1
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = ConfigExportV1 {
            version: 1,
            extraction: Some(self.extraction.clone()),
            diff: Some(self.diff.clone()),
            storage: Some(self.storage.clone()),
        };
        serde_yaml::to_string(&export).map_err(ConfigError::Yaml)
    }

    /// Range and consistency checks
    pub fn validate(&self) -> ConfigResult<()> {
        if self.extraction.key_separator.trim().is_empty() {
            return Err(ConfigError::invalid(
                "extraction.key_separator",
                "separator must contain a visible character, e.g. \" > \"",
            ));
        }
        if self.storage.contracts_dir.trim().is_empty() {
            return Err(ConfigError::invalid(
                "storage.contracts_dir",
                "directory must not be empty",
            ));
        }
        Ok(())
    }
}
