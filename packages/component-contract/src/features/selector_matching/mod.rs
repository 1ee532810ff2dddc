//! Selector Matching Feature
//!
//! - domain/: selector token model and splitting helpers
//! - infrastructure/: parse/pattern cache
//! - matcher: the matching entry point

pub mod domain;
pub mod infrastructure;
pub mod matcher;

pub use infrastructure::{SelectorCache, SelectorCacheStats};
pub use matcher::SelectorMatcher;
