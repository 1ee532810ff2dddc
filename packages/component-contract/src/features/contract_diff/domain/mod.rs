//! Contract diff domain
//!
//! Pipeline stages, in order: structural diff, removal consolidation,
//! grouping, DOM path deduplication, summary.

pub mod change;
pub mod consolidation;
pub mod dom_paths;
pub mod grouping;
pub mod report;
pub mod structural_diff;
pub mod summary;

pub use change::{is_strict_prefix, ChangePath, ChangeRecord, ChangeType, PathSegment};
pub use consolidation::{consolidate, prune_nested, ConsolidationOptions};
pub use dom_paths::{dedupe_dom_paths, DomPathDictionary, DOM_DOMAIN};
pub use grouping::{group_changes, grouped_len, GroupedChange, GroupedChanges, ROOT_DOMAIN};
pub use report::{DiffReport, DiffResult};
pub use structural_diff::diff_values;
pub use summary::DiffSummary;
