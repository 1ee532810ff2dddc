//! Slot names for content projection points
//!
//! - no selector (or `*`) → `default`
//! - `[slot=NAME]` / `slot=NAME` (case-insensitive attribute, quotes optional) → `NAME`
//! - bare `.token` → `token`
//! - anything else → `None` (caller assigns `slot-<n>`)

use crate::features::selector_matching::domain::unquote;
use crate::shared::models::DEFAULT_SLOT;

pub fn derive_slot_name(selector: Option<&str>) -> Option<String> {
    let selector = match selector.map(str::trim) {
        None | Some("") | Some("*") => return Some(DEFAULT_SLOT.to_string()),
        Some(s) => s,
    };

    if let Some(name) = slot_attribute_value(selector) {
        return Some(name.to_string());
    }

    if let Some(class) = selector.strip_prefix('.') {
        if is_plain_token(class) {
            return Some(class.to_string());
        }
    }
    None
}

fn slot_attribute_value(selector: &str) -> Option<&str> {
    let inner = selector
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(selector);
    let (attr, value) = inner.split_once('=')?;
    if !attr.trim().eq_ignore_ascii_case("slot") {
        return None;
    }
    let value = unquote(value.trim());
    is_plain_token(value).then_some(value)
}

fn is_plain_token(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}
