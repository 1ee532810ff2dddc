//! Style Collector
//!
//! Attaches parsed style rules to the DOM structure map via the selector
//! matcher. Rules that match nothing are kept with an empty `appliesTo`.

use std::collections::BTreeMap;

use tracing::debug;

use crate::features::parsing::domain::StyleSheetNode;
use crate::features::selector_matching::SelectorMatcher;
use crate::shared::models::{ElementKey, StructuralElement, StyleRule, StyleSheetContract};

pub struct StyleCollector<'m> {
    matcher: &'m SelectorMatcher,
}

impl<'m> StyleCollector<'m> {
    pub fn new(matcher: &'m SelectorMatcher) -> Self {
        Self { matcher }
    }

    pub fn collect(
        &self,
        sheet: &StyleSheetNode,
        source_file: &str,
        dom: &BTreeMap<ElementKey, StructuralElement>,
    ) -> StyleSheetContract {
        let mut contract = StyleSheetContract {
            source_file: source_file.to_string(),
            rules: BTreeMap::new(),
        };

        sheet.walk_rules(|node| {
            let selector = node.selector.trim();
            if selector.is_empty() {
                return;
            }

            let rule = contract
                .rules
                .entry(selector.to_string())
                .or_insert_with(|| StyleRule {
                    selector: selector.to_string(),
                    ..Default::default()
                });
            node.walk_declarations(|decl| {
                rule.properties.insert(decl.name.clone(), decl.value.clone());
            });

            if rule.applies_to.is_empty() {
                rule.applies_to = dom
                    .iter()
                    .filter(|(key, element)| self.matcher.matches(selector, key, element))
                    .map(|(key, _)| key.clone())
                    .collect();
            }
        });

        debug!(
            source = source_file,
            rules = contract.rules.len(),
            unused = contract.unused_rules().count(),
            "styles collected"
        );
        contract
    }
}
