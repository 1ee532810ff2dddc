//! Markup tree produced by the template front-end
//!
//! Closed set of node kinds; the extractor matches on them exhaustively.

use crate::shared::models::BindingKind;

/// Static attribute `name="value"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextAttribute {
    pub name: String,
    pub value: String,
}

/// Dynamic binding (`[prop]`, `[class.x]`, `[style.x]`, `[attr.x]`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundAttribute {
    pub kind: BindingKind,
    pub name: String,
    pub value: String,
}

/// Event listener `(name)="handler"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundEvent {
    pub name: String,
    pub handler: String,
}

/// Regular element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementNode {
    pub name: String,
    pub attributes: Vec<TextAttribute>,
    pub inputs: Vec<BoundAttribute>,
    pub outputs: Vec<BoundEvent>,
    pub children: Vec<TemplateNode>,
}

impl ElementNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(TextAttribute {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn bind(
        mut self,
        kind: BindingKind,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.inputs.push(BoundAttribute {
            kind,
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn on(mut self, name: impl Into<String>, handler: impl Into<String>) -> Self {
        self.outputs.push(BoundEvent {
            name: name.into(),
            handler: handler.into(),
        });
        self
    }

    pub fn child(mut self, node: impl Into<TemplateNode>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }
}

/// `<ng-content select="...">`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentNode {
    pub selector: Option<String>,
}

/// Structural directive on an `<ng-template>` (`*ngFor`, `*ngIf`, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDirective {
    pub name: String,
    pub expression: String,
}

/// `<ng-template>` or a desugared `*directive` host
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TemplateBlock {
    pub directives: Vec<TemplateDirective>,
    pub children: Vec<TemplateNode>,
}

/// `@for (item of items; track ...) { } @empty { }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForBlock {
    pub item: String,
    pub expression: String,
    pub children: Vec<TemplateNode>,
    pub empty: Vec<TemplateNode>,
}

/// One `@if` / `@else if` / `@else` branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfBranch {
    /// `None` for a trailing `@else`
    pub expression: Option<String>,
    pub alias: Option<String>,
    pub children: Vec<TemplateNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfBlock {
    pub branches: Vec<IfBranch>,
}

/// `@case` (with expression) or `@default` (without)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchCase {
    pub expression: Option<String>,
    pub children: Vec<TemplateNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchBlock {
    pub expression: String,
    pub cases: Vec<SwitchCase>,
}

/// `@defer` with its optional sub-blocks
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeferBlock {
    pub trigger: Option<String>,
    pub children: Vec<TemplateNode>,
    pub placeholder: Vec<TemplateNode>,
    pub loading: Vec<TemplateNode>,
    pub error: Vec<TemplateNode>,
}

/// Node of a parsed template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateNode {
    Element(ElementNode),
    Text(String),
    Content(ContentNode),
    Template(TemplateBlock),
    For(ForBlock),
    If(IfBlock),
    Switch(SwitchBlock),
    Defer(DeferBlock),
}

impl TemplateNode {
    pub fn text(text: impl Into<String>) -> Self {
        TemplateNode::Text(text.into())
    }

    pub fn content(selector: Option<&str>) -> Self {
        TemplateNode::Content(ContentNode {
            selector: selector.map(str::to_string),
        })
    }
}

impl From<ElementNode> for TemplateNode {
    fn from(node: ElementNode) -> Self {
        TemplateNode::Element(node)
    }
}
