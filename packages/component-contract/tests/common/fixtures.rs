//! Fixture front-ends and component sources
//!
//! Template and class parsing are external collaborators; these fixtures
//! return preset trees keyed by file name, so builds stay file-driven.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use component_contract::errors::{ContractError, Result};
use component_contract::features::parsing::domain::{
    ClassDeclaration, ClassMember, ClassSourceFile, Decorator, ElementNode, Expr, ForBlock,
    ImportBinding, ImportDeclaration, MethodMember, Parameter, PropertyMember, TemplateNode,
};
use component_contract::features::parsing::ports::{ClassParser, TemplateParser};
use component_contract::shared::models::BindingKind;

fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string()
}

/// Template front-end returning preset trees by file name
#[derive(Debug, Default)]
pub struct FixtureTemplateParser {
    trees: HashMap<String, Vec<TemplateNode>>,
}

impl FixtureTemplateParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, file: &str, nodes: Vec<TemplateNode>) -> Self {
        self.trees.insert(file.to_string(), nodes);
        self
    }
}

impl TemplateParser for FixtureTemplateParser {
    fn parse_template(&self, _source: &str, path: &Path) -> Result<Vec<TemplateNode>> {
        self.trees
            .get(&file_name(path))
            .cloned()
            .ok_or_else(|| ContractError::parse(path, "no fixture template"))
    }
}

/// Class front-end returning preset files by file name
#[derive(Debug, Default)]
pub struct FixtureClassParser {
    files: HashMap<String, ClassSourceFile>,
}

impl FixtureClassParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, file: &str, source: ClassSourceFile) -> Self {
        self.files.insert(file.to_string(), source);
        self
    }
}

impl ClassParser for FixtureClassParser {
    fn parse_class_file(&self, _source: &str, path: &Path) -> Result<ClassSourceFile> {
        self.files
            .get(&file_name(path))
            .cloned()
            .ok_or_else(|| ContractError::parse(path, "no fixture class"))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Card component
// ═══════════════════════════════════════════════════════════════════════════

pub const CARD_CLASS_FILE: &str = "card.component.ts";
pub const CARD_TEMPLATE_FILE: &str = "card.component.html";
pub const CARD_STYLE_FILE: &str = "card.component.css";

pub const CARD_ROOT: &str = "div#root.card.active";
pub const CARD_HEADER: &str = "div#root.card.active > header.card-header";
pub const CARD_TITLE: &str = "div#root.card.active > header.card-header > h2.title";
pub const CARD_ITEM: &str = "div#root.card.active > li.item";
pub const CARD_BUTTON: &str = "div#root.card.active > button.btn";

pub const CARD_CLASS_SOURCE: &str = r#"import { Component, EventEmitter, Input, OnInit, Output, input } from '@angular/core';

@Component({
  selector: 'app-card',
  templateUrl: './card.component.html',
  styleUrls: ['./card.component.css'],
  styles: ['.btn { color: red; }'],
})
export class CardComponent implements OnInit {
  @Input() title: string = '';
  size = input<'sm' | 'lg'>('sm');
  @Output() closed = new EventEmitter<void>();
  ngOnInit() {}
  toggle(force?: boolean): void {}
}
"#;

pub const CARD_TEMPLATE_SOURCE: &str = r#"<div id="root" class="card" [class.active]="isActive">
  <header class="card-header">
    <ng-content select="[slot=title]"></ng-content>
    <h2 class="title">{{ title }}</h2>
  </header>
  @for (item of items; track item.id) {
    <li class="item" (click)="select(item)"></li>
  }
  <ng-content></ng-content>
  <button class="btn" [attr.aria-label]="label" (click)="closed.emit()">x</button>
</div>
"#;

pub const CARD_STYLE_SOURCE: &str = r#"/* card styles */
.card .title { font-weight: bold; }
.item { padding: 4px; }
.unused { display: none; }
@media (max-width: 600px) {
  .btn { width: 100%; }
}
"#;

pub fn card_template() -> Vec<TemplateNode> {
    let header = ElementNode::new("header")
        .attr("class", "card-header")
        .child(TemplateNode::content(Some("[slot=title]")))
        .child(
            ElementNode::new("h2")
                .attr("class", "title")
                .child(TemplateNode::text("{{ title }}")),
        );
    let items = TemplateNode::For(ForBlock {
        item: "item".to_string(),
        expression: "items".to_string(),
        children: vec![ElementNode::new("li")
            .attr("class", "item")
            .on("click", "select(item)")
            .into()],
        empty: Vec::new(),
    });
    let button = ElementNode::new("button")
        .attr("class", "btn")
        .bind(BindingKind::Attribute, "aria-label", "label")
        .on("click", "closed.emit()")
        .child(TemplateNode::text("x"));

    vec![ElementNode::new("div")
        .attr("id", "root")
        .attr("class", "card")
        .bind(BindingKind::Class, "active", "isActive")
        .child(header)
        .child(items)
        .child(TemplateNode::content(None))
        .child(button)
        .into()]
}

pub fn card_class() -> ClassSourceFile {
    let mut class = ClassDeclaration::new("CardComponent");
    class.decorators.push(Decorator::new(
        "Component",
        vec![Expr::object(vec![
            ("selector", Expr::literal("'app-card'")),
            ("templateUrl", Expr::literal("'./card.component.html'")),
            (
                "styleUrls",
                Expr::Array(vec![Expr::literal("'./card.component.css'")]),
            ),
            (
                "styles",
                Expr::Array(vec![Expr::literal("'.btn { color: red; }'")]),
            ),
        ])],
    ));
    class.implements.push("OnInit".to_string());

    let mut toggle = MethodMember::new("toggle");
    let mut force = Parameter::new("force", Some("boolean"));
    force.optional = true;
    toggle.parameters.push(force);
    toggle.return_type = Some("void".to_string());

    class.members = vec![
        ClassMember::Property(
            PropertyMember::new("title")
                .decorated(Decorator::new("Input", vec![]))
                .typed("string")
                .init(Expr::literal("''")),
        ),
        ClassMember::Property(PropertyMember::new("size").init(Expr::call(
            "input",
            &["'sm' | 'lg'"],
            vec![Expr::literal("'sm'")],
        ))),
        ClassMember::Property(
            PropertyMember::new("closed")
                .decorated(Decorator::new("Output", vec![]))
                .init(Expr::call("new EventEmitter", &["void"], vec![])),
        ),
        ClassMember::Method(MethodMember::new("ngOnInit")),
        ClassMember::Method(toggle),
    ];

    let core = ["Component", "EventEmitter", "Input", "OnInit", "Output", "input"];
    ClassSourceFile {
        imports: vec![ImportDeclaration {
            module_specifier: "@angular/core".to_string(),
            bindings: core
                .iter()
                .map(|name| ImportBinding::Named {
                    imported: name.to_string(),
                    local: None,
                })
                .collect(),
        }],
        classes: vec![class],
    }
}

pub fn card_parsers() -> (FixtureTemplateParser, FixtureClassParser) {
    (
        FixtureTemplateParser::new().with(CARD_TEMPLATE_FILE, card_template()),
        FixtureClassParser::new().with(CARD_CLASS_FILE, card_class()),
    )
}

/// Write the card sources into `dir`; returns the class file path
pub fn write_card_component(dir: &Path) -> PathBuf {
    fs::write(dir.join(CARD_CLASS_FILE), CARD_CLASS_SOURCE).unwrap();
    fs::write(dir.join(CARD_TEMPLATE_FILE), CARD_TEMPLATE_SOURCE).unwrap();
    fs::write(dir.join(CARD_STYLE_FILE), CARD_STYLE_SOURCE).unwrap();
    dir.join(CARD_CLASS_FILE)
}
