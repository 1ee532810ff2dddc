//! Removal consolidation and pruning
//!
//! More than one removal of a whole style rule collapses into a single
//! `[styles, rules]` removal listing the selectors. Remaining removals are
//! pruned: a removal nested under another kept removal is dropped.

use serde_json::Value;

use super::change::{is_strict_prefix, ChangeRecord, PathSegment};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsolidationOptions {
    pub consolidate_style_rules: bool,
    pub prune_nested_removals: bool,
}

impl Default for ConsolidationOptions {
    fn default() -> Self {
        Self {
            consolidate_style_rules: true,
            prune_nested_removals: true,
        }
    }
}

/// Selector of a `[styles, rules, <selector>]` removal
fn removed_style_rule(record: &ChangeRecord) -> Option<&str> {
    match record.path.as_slice() {
        [PathSegment::Key(section), PathSegment::Key(rules), PathSegment::Key(selector)]
            if section == "styles" && rules == "rules" =>
        {
            Some(selector.as_str())
        }
        _ => None,
    }
}

/// Non-removals first (original order), then the consolidated style
/// removal, then the pruned removals.
pub fn consolidate(records: Vec<ChangeRecord>, options: ConsolidationOptions) -> Vec<ChangeRecord> {
    let (removals, mut merged): (Vec<_>, Vec<_>) =
        records.into_iter().partition(ChangeRecord::is_removal);

    let (style_removals, other_removals): (Vec<_>, Vec<_>) = removals
        .into_iter()
        .partition(|r| options.consolidate_style_rules && removed_style_rule(r).is_some());

    let mut remaining = other_removals;
    if style_removals.len() > 1 {
        let selectors: Vec<Value> = style_removals
            .iter()
            .filter_map(removed_style_rule)
            .map(|s| Value::String(s.to_string()))
            .collect();
        merged.push(ChangeRecord::remove(
            vec![PathSegment::key("styles"), PathSegment::key("rules")],
            Value::Array(selectors),
        ));
    } else {
        remaining.extend(style_removals);
    }

    if options.prune_nested_removals {
        merged.extend(prune_nested(remaining));
    } else {
        merged.extend(remaining);
    }
    merged
}

/// Drop removals that sit under a shorter kept removal
pub fn prune_nested(mut removals: Vec<ChangeRecord>) -> Vec<ChangeRecord> {
    removals.sort_by_key(|r| r.path.len());
    let mut kept: Vec<ChangeRecord> = Vec::with_capacity(removals.len());
    for record in removals {
        if !kept.iter().any(|k| is_strict_prefix(&k.path, &record.path)) {
            kept.push(record);
        }
    }
    kept
}
