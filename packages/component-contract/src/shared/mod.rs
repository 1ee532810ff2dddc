//! Shared module - Common types and utilities
//!
//! Contract model types used by every feature, plus small helpers.

pub mod models;
pub mod utils;

// Re-exports for convenience
pub use models::*;
pub use utils::{content_hash, element_token, PathStack};
