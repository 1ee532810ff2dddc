//! Structural context stack
//!
//! Persistent (shared-tail) stack of the repetition/conditional/deferred
//! blocks enclosing a markup node. `push` returns a new stack and never
//! mutates the receiver, so a stack stored on an element stays valid while
//! the traversal keeps pushing frames for deeper nodes.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Kind of enclosing block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContextKind {
    For,
    If,
    Switch,
    SwitchCase,
    SwitchDefault,
    Defer,
}

impl ContextKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContextKind::For => "for",
            ContextKind::If => "if",
            ContextKind::Switch => "switch",
            ContextKind::SwitchCase => "switchCase",
            ContextKind::SwitchDefault => "switchDefault",
            ContextKind::Defer => "defer",
        }
    }
}

/// One enclosing block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextFrame {
    pub kind: ContextKind,

    /// Loop item alias (`item` in `@for (item of items)`) or `as` alias of an `@if`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    /// Source expression driving the block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
}

impl ContextFrame {
    pub fn new(kind: ContextKind) -> Self {
        Self {
            kind,
            alias: None,
            expression: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn with_expression(mut self, expression: impl Into<String>) -> Self {
        self.expression = Some(expression.into());
        self
    }
}

struct Link {
    frame: ContextFrame,
    parent: Option<Arc<Link>>,
}

/// Immutable stack of [`ContextFrame`]s
#[derive(Clone, Default)]
pub struct ContextStack {
    top: Option<Arc<Link>>,
    len: usize,
}

impl ContextStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new stack with `frame` on top
    pub fn push(&self, frame: ContextFrame) -> Self {
        Self {
            top: Some(Arc::new(Link {
                frame,
                parent: self.top.clone(),
            })),
            len: self.len + 1,
        }
    }

    /// Innermost frame
    pub fn peek(&self) -> Option<&ContextFrame> {
        self.top.as_deref().map(|link| &link.frame)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate innermost first
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.top.as_deref(),
        }
    }

    /// Frames outermost first
    pub fn to_vec(&self) -> Vec<ContextFrame> {
        let mut frames: Vec<ContextFrame> = self.iter().cloned().collect();
        frames.reverse();
        frames
    }
}

/// Iterator over a [`ContextStack`], innermost first
pub struct Iter<'a> {
    next: Option<&'a Link>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a ContextFrame;

    fn next(&mut self) -> Option<Self::Item> {
        let link = self.next?;
        self.next = link.parent.as_deref();
        Some(&link.frame)
    }
}

impl FromIterator<ContextFrame> for ContextStack {
    /// Frames are pushed in iteration order (outermost first)
    fn from_iter<I: IntoIterator<Item = ContextFrame>>(iter: I) -> Self {
        iter.into_iter()
            .fold(ContextStack::new(), |stack, frame| stack.push(frame))
    }
}

impl PartialEq for ContextStack {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for ContextStack {}

impl fmt::Debug for ContextStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.to_vec()).finish()
    }
}

impl Serialize for ContextStack {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.to_vec())
    }
}

impl<'de> Deserialize<'de> for ContextStack {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let frames = Vec::<ContextFrame>::deserialize(deserializer)?;
        Ok(frames.into_iter().collect())
    }
}
