//! Feature modules - Each feature follows Hexagonal Architecture
//!
//! Each feature contains (where it needs them):
//! - domain/     - Pure rules and models
//! - ports/      - Interface definitions (traits)
//! - application/ - Use cases
//! - infrastructure/ - File system and parser implementations

pub mod parsing;
pub mod selector_matching;

// Extraction
pub mod interface_extraction;
pub mod style_collection;
pub mod template_extraction;

// Contract lifecycle
pub mod contract_builder;
pub mod contract_diff;
pub mod contract_query;
pub mod contract_store;
