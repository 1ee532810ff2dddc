//! Output of markup extraction

use std::collections::BTreeMap;

use crate::shared::models::{ElementKey, SlotDescriptor, StructuralElement};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateExtraction {
    pub slots: BTreeMap<String, SlotDescriptor>,
    pub dom: BTreeMap<ElementKey, StructuralElement>,
}

impl TemplateExtraction {
    /// Every non-root parent key resolves inside `dom`
    pub fn is_consistent(&self) -> bool {
        self.dom.iter().all(|(key, el)| match &el.parent_key {
            None => true,
            Some(parent) => self
                .dom
                .get(parent)
                .map(|p| p.child_keys.contains(key))
                .unwrap_or(false),
        })
    }
}
