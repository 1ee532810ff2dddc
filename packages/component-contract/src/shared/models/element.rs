//! Structural element model (one rendered markup node)

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::context_stack::ContextStack;

/// Path-derived element identifier, e.g. `div#root > span.foo`
pub type ElementKey = String;

/// Kind of a dynamic binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BindingKind {
    /// `[class.name]`
    Class,
    /// `[style.prop]`
    Style,
    /// `[attr.name]`
    Attribute,
    /// `[prop]`
    Property,
}

/// Dynamic binding on an element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Binding {
    pub kind: BindingKind,
    pub name: String,
    pub source_expression: String,
}

/// Event listener on an element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventBinding {
    pub name: String,
    pub handler: String,
}

/// One rendered node of the component markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuralElement {
    pub tag: String,

    /// Containing element; `None` for roots
    pub parent_key: Option<ElementKey>,

    /// Contained elements in document order
    #[serde(default)]
    pub child_keys: Vec<ElementKey>,

    #[serde(default)]
    pub bindings: Vec<Binding>,

    #[serde(default)]
    pub static_attributes: BTreeMap<String, String>,

    #[serde(default)]
    pub events: Vec<EventBinding>,

    #[serde(default, skip_serializing_if = "ContextStack::is_empty")]
    pub structural_context: ContextStack,
}

impl StructuralElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            parent_key: None,
            child_keys: Vec::new(),
            bindings: Vec::new(),
            static_attributes: BTreeMap::new(),
            events: Vec::new(),
            structural_context: ContextStack::new(),
        }
    }

    /// Static attribute value
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.static_attributes.get(name).map(String::as_str)
    }

    /// Tokens of the static `class` attribute
    pub fn static_classes(&self) -> impl Iterator<Item = &str> {
        self.attribute("class")
            .into_iter()
            .flat_map(|classes| classes.split_whitespace())
    }

    /// Suffixes of `class.<suffix>` bindings
    pub fn bound_classes(&self) -> impl Iterator<Item = &str> {
        self.bindings
            .iter()
            .filter(|b| b.kind == BindingKind::Class)
            .map(|b| b.name.as_str())
    }
}
