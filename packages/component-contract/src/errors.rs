//! Error types for component-contract
//!
//! Provides unified error handling across the crate.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::ConfigError;

/// Main error type for contract operations
#[derive(Debug, Error)]
pub enum ContractError {
    /// A required source artifact could not be located or read
    #[error("Missing input: {path}")]
    MissingInput { path: PathBuf },

    /// The external parser rejected a source artifact
    #[error("Parse error in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// A stored document is neither a contract envelope nor a bare contract
    #[error("Malformed contract {path}: {reason}")]
    MalformedContract { path: PathBuf, reason: String },

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ContractError {
    /// Create a missing-input error
    pub fn missing(path: impl AsRef<Path>) -> Self {
        ContractError::MissingInput {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a parse error
    pub fn parse(path: impl AsRef<Path>, msg: impl Into<String>) -> Self {
        ContractError::Parse {
            path: path.as_ref().to_path_buf(),
            message: msg.into(),
        }
    }

    /// Create a malformed-contract error
    pub fn malformed(path: impl AsRef<Path>, reason: impl Into<String>) -> Self {
        ContractError::MalformedContract {
            path: path.as_ref().to_path_buf(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for contract operations
pub type Result<T> = std::result::Result<T, ContractError>;
