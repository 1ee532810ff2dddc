//! Common test utilities for component-contract
//!
//! Fixture front-ends and component sources, plus builders for contracts.

#![allow(dead_code)]

pub mod fixtures;

// Re-export all utilities
pub use builders::*;
pub use fixtures::*;
