//! DOM path deduplication
//!
//! Element keys repeat across `dom` change paths and get long. Each distinct
//! key is replaced by a short alias (`@1`, `@2`, ...) assigned in order of
//! first appearance; the dictionary maps aliases back to keys.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use super::change::PathSegment;
use super::grouping::GroupedChanges;
use crate::shared::models::ElementKey;

pub const DOM_DOMAIN: &str = "dom";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DomPathDictionary(BTreeMap<String, ElementKey>);

impl DomPathDictionary {
    pub fn resolve(&self, alias: &str) -> Option<&ElementKey> {
        self.0.get(alias)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ElementKey)> {
        self.0.iter()
    }
}

/// Replace known element keys in `dom` paths with aliases
pub fn dedupe_dom_paths(
    groups: &mut GroupedChanges,
    known_keys: &BTreeSet<ElementKey>,
) -> DomPathDictionary {
    let mut dictionary = DomPathDictionary::default();
    let Some(dom) = groups.get_mut(DOM_DOMAIN) else {
        return dictionary;
    };

    let mut aliases: HashMap<ElementKey, String> = HashMap::new();
    // Inside the `dom` domain the element key is always the first segment.
    for change in dom.values_mut().flat_map(|changes| changes.iter_mut()) {
        let Some(PathSegment::Key(key)) = change.path.first_mut() else {
            continue;
        };
        if !known_keys.contains(key.as_str()) {
            continue;
        }
        let next = aliases.len() + 1;
        let alias = aliases
            .entry(key.clone())
            .or_insert_with(|| format!("@{}", next))
            .clone();
        dictionary.0.entry(alias.clone()).or_insert_with(|| key.clone());
        *key = alias;
    }
    dictionary
}
