//! Markup/Slot Extractor
//!
//! Single depth-first, pre-order pass over a parsed template producing the
//! DOM structure map and the slot map.
//!
//! Element keys join ancestor `tag[#id][.class...]` tokens with the
//! configured separator. Sibling key collisions get an `:nth(k)` suffix on
//! the later element's token.

use std::collections::BTreeMap;

use tracing::debug;

use crate::config::ExtractionConfig;
use crate::features::parsing::domain::{
    ContentNode, DeferBlock, ElementNode, ForBlock, IfBlock, SwitchBlock, TemplateBlock,
    TemplateDirective, TemplateNode,
};
use crate::features::template_extraction::domain::{derive_slot_name, TemplateExtraction};
use crate::shared::models::{
    Binding, ContextFrame, ContextKind, ContextStack, ElementKey, EventBinding, SlotDescriptor,
    StructuralElement,
};
use crate::shared::utils::{element_token, PathStack};

#[derive(Debug, Clone, Default)]
pub struct TemplateExtractor {
    config: ExtractionConfig,
}

impl TemplateExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ExtractionConfig) -> Self {
        Self { config }
    }

    pub fn extract(&self, nodes: &[TemplateNode]) -> TemplateExtraction {
        let mut walker = Walker {
            path: PathStack::with_separator(self.config.key_separator.clone()),
            out: TemplateExtraction::default(),
            generated_slots: 0,
        };
        walker.visit_nodes(nodes, &ContextStack::new(), None);

        debug!(
            elements = walker.out.dom.len(),
            slots = walker.out.slots.len(),
            "template extracted"
        );
        walker.out
    }
}

struct Walker {
    path: PathStack,
    out: TemplateExtraction,
    generated_slots: usize,
}

impl Walker {
    fn visit_nodes(&mut self, nodes: &[TemplateNode], ctx: &ContextStack, parent: Option<&str>) {
        for node in nodes {
            self.visit(node, ctx, parent);
        }
    }

    fn visit(&mut self, node: &TemplateNode, ctx: &ContextStack, parent: Option<&str>) {
        match node {
            TemplateNode::Element(element) => self.visit_element(element, ctx, parent),
            TemplateNode::Text(_) => {}
            TemplateNode::Content(content) => self.record_slot(content),
            TemplateNode::Template(block) => self.visit_template(block, ctx, parent),
            TemplateNode::For(block) => self.visit_for(block, ctx, parent),
            TemplateNode::If(block) => self.visit_if(block, ctx, parent),
            TemplateNode::Switch(block) => self.visit_switch(block, ctx, parent),
            TemplateNode::Defer(block) => self.visit_defer(block, ctx, parent),
        }
    }

    fn visit_element(&mut self, node: &ElementNode, ctx: &ContextStack, parent: Option<&str>) {
        let element = build_element(node, parent, ctx);

        let id = element.attribute("id");
        let mut classes: Vec<&str> = Vec::new();
        for class in element.static_classes().chain(element.bound_classes()) {
            if !classes.contains(&class) {
                classes.push(class);
            }
        }
        let base_token = element_token(&element.tag, id, classes);
        let (token, key) = self.unique_key(&base_token);

        if let Some(parent_key) = parent {
            if let Some(parent_el) = self.out.dom.get_mut(parent_key) {
                parent_el.child_keys.push(key.clone());
            }
        }
        self.out.dom.insert(key.clone(), element);

        self.path.push(token);
        self.visit_nodes(&node.children, ctx, Some(key.as_str()));
        self.path.pop();
    }

    fn unique_key(&self, base_token: &str) -> (String, ElementKey) {
        let key = self.path.key_with(base_token);
        if !self.out.dom.contains_key(&key) {
            return (base_token.to_string(), key);
        }
        let mut n = 2;
        loop {
            let token = format!("{}:nth({})", base_token, n);
            let key = self.path.key_with(&token);
            if !self.out.dom.contains_key(&key) {
                return (token, key);
            }
            n += 1;
        }
    }

    fn record_slot(&mut self, content: &ContentNode) {
        let selector = content.selector.as_deref();
        let name = match derive_slot_name(selector) {
            Some(name) if !self.out.slots.contains_key(&name) => name,
            _ => self.next_generated_slot(),
        };
        let selector_expression = selector
            .map(str::trim)
            .filter(|s| !s.is_empty() && *s != "*")
            .map(str::to_string);
        self.out.slots.insert(
            name.clone(),
            SlotDescriptor {
                name,
                selector_expression,
            },
        );
    }

    fn next_generated_slot(&mut self) -> String {
        loop {
            let name = format!("slot-{}", self.generated_slots);
            self.generated_slots += 1;
            if !self.out.slots.contains_key(&name) {
                return name;
            }
        }
    }

    fn visit_template(&mut self, block: &TemplateBlock, ctx: &ContextStack, parent: Option<&str>) {
        let inner = block
            .directives
            .iter()
            .filter_map(directive_frame)
            .fold(ctx.clone(), |stack, frame| stack.push(frame));
        self.visit_nodes(&block.children, &inner, parent);
    }

    fn visit_for(&mut self, block: &ForBlock, ctx: &ContextStack, parent: Option<&str>) {
        let inner = ctx.push(
            ContextFrame::new(ContextKind::For)
                .with_alias(block.item.clone())
                .with_expression(block.expression.clone()),
        );
        self.visit_nodes(&block.children, &inner, parent);
        self.visit_nodes(&block.empty, &inner, parent);
    }

    fn visit_if(&mut self, block: &IfBlock, ctx: &ContextStack, parent: Option<&str>) {
        for branch in &block.branches {
            let mut frame = ContextFrame::new(ContextKind::If);
            frame.expression = branch.expression.clone();
            frame.alias = branch.alias.clone();
            let inner = ctx.push(frame);
            self.visit_nodes(&branch.children, &inner, parent);
        }
    }

    fn visit_switch(&mut self, block: &SwitchBlock, ctx: &ContextStack, parent: Option<&str>) {
        let switch_ctx =
            ctx.push(ContextFrame::new(ContextKind::Switch).with_expression(block.expression.clone()));
        for case in &block.cases {
            let frame = match &case.expression {
                Some(expr) => ContextFrame::new(ContextKind::SwitchCase).with_expression(expr.clone()),
                None => ContextFrame::new(ContextKind::SwitchDefault),
            };
            let inner = switch_ctx.push(frame);
            self.visit_nodes(&case.children, &inner, parent);
        }
    }

    fn visit_defer(&mut self, block: &DeferBlock, ctx: &ContextStack, parent: Option<&str>) {
        let mut frame = ContextFrame::new(ContextKind::Defer);
        frame.expression = block.trigger.clone();
        let inner = ctx.push(frame);
        for nodes in [&block.children, &block.placeholder, &block.loading, &block.error] {
            self.visit_nodes(nodes, &inner, parent);
        }
    }
}

fn build_element(node: &ElementNode, parent: Option<&str>, ctx: &ContextStack) -> StructuralElement {
    let mut element = StructuralElement::new(node.name.clone());
    element.parent_key = parent.map(str::to_string);
    element.static_attributes = node
        .attributes
        .iter()
        .map(|a| (a.name.clone(), a.value.clone()))
        .collect::<BTreeMap<_, _>>();
    element.bindings = node
        .inputs
        .iter()
        .map(|b| Binding {
            kind: b.kind,
            name: b.name.clone(),
            source_expression: b.value.clone(),
        })
        .collect();
    element.events = node
        .outputs
        .iter()
        .map(|e| EventBinding {
            name: e.name.clone(),
            handler: e.handler.clone(),
        })
        .collect();
    element.structural_context = ctx.clone();
    element
}

/// Frame for a legacy structural directive (`*ngFor`, `*ngIf`, ...)
fn directive_frame(directive: &TemplateDirective) -> Option<ContextFrame> {
    let expr = directive.expression.trim();
    match directive.name.as_str() {
        "ngFor" | "ngForOf" => {
            let head = expr.split(';').next().unwrap_or(expr).trim();
            let head = head.strip_prefix("let ").unwrap_or(head);
            let frame = match head.split_once(" of ") {
                Some((alias, source)) => ContextFrame::new(ContextKind::For)
                    .with_alias(alias.trim())
                    .with_expression(source.trim()),
                None => ContextFrame::new(ContextKind::For).with_expression(head),
            };
            Some(frame)
        }
        "ngIf" => {
            let condition = expr.split(';').next().unwrap_or(expr).trim();
            let frame = match condition.rsplit_once(" as ") {
                Some((cond, alias)) => ContextFrame::new(ContextKind::If)
                    .with_expression(cond.trim())
                    .with_alias(alias.trim()),
                None => ContextFrame::new(ContextKind::If).with_expression(condition),
            };
            Some(frame)
        }
        "ngSwitchCase" => Some(ContextFrame::new(ContextKind::SwitchCase).with_expression(expr)),
        "ngSwitchDefault" => Some(ContextFrame::new(ContextKind::SwitchDefault)),
        _ => None,
    }
}
