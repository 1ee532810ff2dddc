//! Selector cache
//!
//! Memoizes parsed selector tokens and the class lists of ngClass-style
//! expressions. Owned by a matcher instance; `clear()` resets it.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::features::selector_matching::domain::{ClassListScanner, SimpleSelector};

#[derive(Debug)]
pub struct SelectorCache {
    tokens: RwLock<HashMap<String, Arc<SimpleSelector>>>,
    class_lists: RwLock<HashMap<String, Arc<BTreeSet<String>>>>,
    scanner: Option<ClassListScanner>,
}

/// Cache occupancy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectorCacheStats {
    pub tokens: usize,
    pub class_lists: usize,
}

impl Default for SelectorCache {
    fn default() -> Self {
        let scanner = match ClassListScanner::new() {
            Ok(scanner) => Some(scanner),
            Err(err) => {
                tracing::warn!("class list patterns failed to compile: {}", err);
                None
            }
        };
        Self {
            tokens: RwLock::new(HashMap::new()),
            class_lists: RwLock::new(HashMap::new()),
            scanner,
        }
    }
}

impl SelectorCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parsed form of a compound token
    pub fn token(&self, token: &str) -> Arc<SimpleSelector> {
        if let Some(hit) = self.tokens.read().get(token) {
            return Arc::clone(hit);
        }
        let parsed = Arc::new(SimpleSelector::parse(token));
        self.tokens
            .write()
            .entry(token.to_string())
            .or_insert(parsed)
            .clone()
    }

    /// Class names an ngClass-style expression lists
    pub fn class_list(&self, expression: &str) -> Arc<BTreeSet<String>> {
        if let Some(hit) = self.class_lists.read().get(expression) {
            return Arc::clone(hit);
        }
        let classes = Arc::new(
            self.scanner
                .as_ref()
                .map(|scanner| scanner.scan(expression))
                .unwrap_or_default(),
        );
        self.class_lists
            .write()
            .entry(expression.to_string())
            .or_insert(classes)
            .clone()
    }

    pub fn stats(&self) -> SelectorCacheStats {
        SelectorCacheStats {
            tokens: self.tokens.read().len(),
            class_lists: self.class_lists.read().len(),
        }
    }

    /// Drop every cached entry
    pub fn clear(&self) {
        self.tokens.write().clear();
        self.class_lists.write().clear();
    }
}
