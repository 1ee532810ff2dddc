//! Configuration system
//!
//! Defaults reproduce the canonical contract format. A versioned YAML file
//! can override individual sections:
//!
//! ```yaml
//! version: 1
//! extraction:
//!   key_separator: " > "
//! diff:
//!   consolidate_style_rules: true
//!   prune_nested_removals: true
//!   dedupe_dom_paths: true
//! storage:
//!   contracts_dir: ".contracts"
//!   pretty: true
//! ```

pub mod contract_config;
pub mod error;
pub mod io;

// Re-exports
pub use contract_config::{
    ContractConfig, DiffConfig, ExtractionConfig, StorageConfig, DEFAULT_KEY_SEPARATOR,
};
pub use error::{ConfigError, ConfigResult};
pub use io::ConfigExportV1;
