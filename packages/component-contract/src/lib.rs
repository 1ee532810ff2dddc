/*
 * Component Contract - structural contracts for UI components
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Contract data model (elements, slots, public API, styles)
 * - features/    : Vertical slices (parsing → extraction → build → diff/query/store)
 * - config/      : Versioned YAML configuration
 *
 * Builds are independent and fan out over Rayon.
 */

#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and utilities
pub mod shared;

/// Feature modules
pub mod features;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::ContractConfig;
pub use errors::{ContractError, Result};
pub use features::contract_builder::{BuildRequest, ContractBuildUseCase};
pub use features::contract_diff::{ContractDiffUseCase, DiffReport, DiffResult};
pub use features::contract_query::{ContractQuery, ContractQueryEngine, QueryResult};
pub use features::contract_store::ContractStore;
pub use features::parsing::{ClassParser, CssStyleParser, ParserSet, StyleParser, TemplateParser};
pub use shared::models::Contract;
