//! Selector Matcher
//!
//! Decides whether a style selector targets one structural element.
//!
//! - comma lists match if any branch matches
//! - of a descendant chain only the last compound token is checked;
//!   ancestors are not verified
//! - `.name` also matches `[class.name]` bindings and ngClass-style literals
//! - matching is byte-exact after trimming surrounding whitespace

use tracing::trace;

use crate::features::selector_matching::domain::{last_compound, split_top_level, SimpleSelector};
use crate::features::selector_matching::infrastructure::SelectorCache;
use crate::shared::models::{BindingKind, StructuralElement};

/// Property bindings whose expression lists classes
const CLASS_LIST_BINDINGS: &[&str] = &["ngClass", "class", "className"];

#[derive(Debug, Default)]
pub struct SelectorMatcher {
    cache: SelectorCache,
}

impl SelectorMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an existing cache (e.g. a fresh one per test)
    pub fn with_cache(cache: SelectorCache) -> Self {
        Self { cache }
    }

    pub fn cache(&self) -> &SelectorCache {
        &self.cache
    }

    /// Does `selector` target the element stored under `element_key`?
    pub fn matches(&self, selector: &str, element_key: &str, element: &StructuralElement) -> bool {
        let branches = split_top_level(selector, |c| c == ',');
        if branches.len() > 1 {
            return branches
                .into_iter()
                .any(|branch| self.matches(branch, element_key, element));
        }

        let token = last_compound(selector);
        if token.is_empty() {
            return false;
        }
        let simple = self.cache.token(token);
        let matched = self.matches_simple(&simple, element);
        trace!(selector, element_key, matched, "selector check");
        matched
    }

    fn matches_simple(&self, selector: &SimpleSelector, element: &StructuralElement) -> bool {
        match selector {
            SimpleSelector::Class(name) => self.has_class(element, name),
            SimpleSelector::Id(id) => element.attribute("id") == Some(id.as_str()),
            SimpleSelector::AttributePresent(name) => element.static_attributes.contains_key(name),
            SimpleSelector::Attribute { name, op, value } => element
                .attribute(name)
                .map(|actual| op.apply(actual, value))
                .unwrap_or(false),
            SimpleSelector::Tag(tag) => element.tag == *tag,
        }
    }

    fn has_class(&self, element: &StructuralElement, name: &str) -> bool {
        if element.static_classes().any(|c| c == name) {
            return true;
        }
        if element.bound_classes().any(|c| c == name) {
            return true;
        }
        element
            .bindings
            .iter()
            .filter(|b| {
                b.kind == BindingKind::Property && CLASS_LIST_BINDINGS.contains(&b.name.as_str())
            })
            .any(|b| self.cache.class_list(&b.source_expression).contains(name))
    }
}
