//! Contract build tests - sources on disk through the full extraction path

#[path = "../common/mod.rs"]
mod common;
use common::*;

use std::fs;

use component_contract::features::contract_builder::{BuildRequest, ContractBuildUseCase};
use component_contract::features::interface_extraction::DeclaredIo;
use component_contract::features::parsing::domain::{Decorator, ElementNode, Expr};
use component_contract::features::parsing::{CssStyleParser, ParserSet};
use component_contract::shared::models::ContextKind;
use component_contract::shared::utils::content_hash;
use component_contract::ContractError;
use pretty_assertions::assert_eq;

fn build_card(dir: &std::path::Path) -> component_contract::Contract {
    let class_path = write_card_component(dir);
    let (templates, classes) = card_parsers();
    let use_case = ContractBuildUseCase::new(ParserSet {
        template: &templates,
        class: &classes,
        style: &CssStyleParser,
    });
    use_case.build(&BuildRequest::new(class_path)).unwrap()
}

// ═══════════════════════════════════════════════════════════════════════════
// Markup and slots
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn build_card_dom_structure() {
    let dir = tempfile::tempdir().unwrap();
    let contract = build_card(dir.path());

    let keys: Vec<&str> = contract.dom.keys().map(String::as_str).collect();
    assert_eq!(keys, vec![CARD_ROOT, CARD_BUTTON, CARD_HEADER, CARD_TITLE, CARD_ITEM]);

    let root = &contract.dom[CARD_ROOT];
    assert!(root.parent_key.is_none());
    assert_eq!(
        root.child_keys,
        vec![
            CARD_HEADER.to_string(),
            CARD_ITEM.to_string(),
            CARD_BUTTON.to_string()
        ]
    );
    assert_eq!(contract.dom[CARD_TITLE].parent_key.as_deref(), Some(CARD_HEADER));

    let item = &contract.dom[CARD_ITEM];
    assert_eq!(item.events[0].handler, "select(item)");
    let frame = item.structural_context.peek().unwrap();
    assert_eq!(frame.kind, ContextKind::For);
    assert_eq!(frame.alias.as_deref(), Some("item"));
    assert!(contract.dom[CARD_BUTTON].structural_context.is_empty());
}

#[test]
fn build_card_slots() {
    let dir = tempfile::tempdir().unwrap();
    let contract = build_card(dir.path());

    let names: Vec<&str> = contract.slots.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["default", "title"]);
    assert_eq!(
        contract.slots["title"].selector_expression.as_deref(),
        Some("[slot=title]")
    );

    let value = contract.to_value().unwrap();
    assert_eq!(value["slots"]["title"]["selectorExpression"], "[slot=title]");
    assert!(value["slots"]["default"].get("selectorExpression").is_none());
}

// ═══════════════════════════════════════════════════════════════════════════
// Styles, interface, meta
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn build_card_styles() {
    let dir = tempfile::tempdir().unwrap();
    let contract = build_card(dir.path());
    let rules = &contract.styles.rules;

    assert_eq!(rules[".card .title"].applies_to, vec![CARD_TITLE.to_string()]);
    assert_eq!(rules[".item"].applies_to, vec![CARD_ITEM.to_string()]);
    assert!(rules[".unused"].applies_to.is_empty());

    // Inline styles replace the external `.btn` rule wholesale.
    let btn = &rules[".btn"];
    assert_eq!(btn.properties.get("color").map(String::as_str), Some("red"));
    assert!(btn.properties.get("width").is_none());
    assert_eq!(btn.applies_to, vec![CARD_BUTTON.to_string()]);

    assert!(contract.styles.source_file.ends_with(CARD_STYLE_FILE));
}

#[test]
fn build_card_public_api_and_meta() {
    let dir = tempfile::tempdir().unwrap();
    let contract = build_card(dir.path());
    let api = &contract.public_api;

    assert_eq!(api.properties["title"].type_name, "string");
    assert_eq!(api.properties["size"].type_name, "'sm' | 'lg'");
    assert_eq!(api.events["closed"].type_name, "void");
    assert_eq!(api.methods.keys().collect::<Vec<_>>(), vec!["toggle"]);
    assert!(api.lifecycle.contains("OnInit"));
    assert_eq!(api.imports.len(), 6);
    let value = contract.to_value().unwrap();
    assert_eq!(
        value["publicApi"]["imports"][0]["originPath"],
        api.imports[0].origin_path.as_str()
    );
    assert_eq!(value["meta"]["rootSelector"], "app-card");

    assert_eq!(contract.meta.name, "CardComponent");
    assert_eq!(contract.meta.root_selector, "app-card");
    assert_eq!(contract.meta.kind, "component");

    let style_inline = ".btn { color: red; }";
    let expected = content_hash([
        CARD_CLASS_SOURCE,
        CARD_TEMPLATE_SOURCE,
        CARD_STYLE_SOURCE,
        style_inline,
    ]);
    assert_eq!(contract.meta.content_hash, expected);
}

#[test]
fn build_is_deterministic_apart_from_timestamp() {
    let dir = tempfile::tempdir().unwrap();
    let mut first = build_card(dir.path());
    let second = build_card(dir.path());

    first.meta.generated_at = second.meta.generated_at;
    assert_eq!(first, second);
}

// ═══════════════════════════════════════════════════════════════════════════
// Inline sources, failures, batches
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn build_with_inline_template() {
    let dir = tempfile::tempdir().unwrap();
    let class_path = dir.path().join("badge.component.ts");
    fs::write(&class_path, "@Component({ template: '<span class=\"badge\"></span>' })").unwrap();

    let mut class = card_class();
    class.classes[0].name = "BadgeComponent".to_string();
    class.classes[0].decorators[0] = Decorator::new(
        "Component",
        vec![Expr::object(vec![(
            "template",
            Expr::literal("'<span class=\"badge\"></span>'"),
        )])],
    );
    let templates = FixtureTemplateParser::new().with(
        "badge.component.ts",
        vec![ElementNode::new("span").attr("class", "badge").into()],
    );
    let classes = FixtureClassParser::new().with("badge.component.ts", class);
    let use_case = ContractBuildUseCase::new(ParserSet {
        template: &templates,
        class: &classes,
        style: &CssStyleParser,
    });

    let contract = use_case.build(&BuildRequest::new(&class_path)).unwrap();

    assert_eq!(contract.meta.name, "BadgeComponent");
    assert!(contract.dom.contains_key("span.badge"));
    assert!(contract.styles.rules.is_empty());
}

#[test]
fn build_missing_template_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let class_path = write_card_component(dir.path());
    fs::remove_file(dir.path().join(CARD_TEMPLATE_FILE)).unwrap();
    let (templates, classes) = card_parsers();
    let use_case = ContractBuildUseCase::new(ParserSet {
        template: &templates,
        class: &classes,
        style: &CssStyleParser,
    });

    let err = use_case.build(&BuildRequest::new(class_path)).unwrap_err();
    match err {
        ContractError::MissingInput { path } => {
            assert!(path.ends_with(CARD_TEMPLATE_FILE));
        }
        other => panic!("expected MissingInput, got {other:?}"),
    }
}

#[test]
fn build_degrades_when_class_unparseable() {
    let dir = tempfile::tempdir().unwrap();
    write_card_component(dir.path());
    let class_path = dir.path().join("broken.component.ts");
    fs::write(&class_path, "export class {").unwrap();
    let (templates, classes) = card_parsers();
    let use_case = ContractBuildUseCase::new(ParserSet {
        template: &templates,
        class: &classes,
        style: &CssStyleParser,
    });

    let request = BuildRequest::new(&class_path)
        .with_template(dir.path().join(CARD_TEMPLATE_FILE))
        .with_style(dir.path().join(CARD_STYLE_FILE))
        .with_declared(DeclaredIo::new(["title", "size: cardSize"], ["closed"]))
        .with_name("BrokenCard");
    let contract = use_case.build(&request).unwrap();

    assert_eq!(contract.meta.name, "BrokenCard");
    assert_eq!(
        contract.public_api.properties["size"].alias.as_deref(),
        Some("cardSize")
    );
    assert!(contract.public_api.events.contains_key("closed"));
    assert!(contract.public_api.methods.is_empty());
    assert!(contract.public_api.imports.is_empty());
    assert!(contract.dom.contains_key(CARD_ROOT));
    assert_eq!(contract.styles.rules[".btn"].properties["width"], "100%");
}

#[test]
fn build_many_keeps_request_order() {
    let dir = tempfile::tempdir().unwrap();
    let class_path = write_card_component(dir.path());
    let (templates, classes) = card_parsers();
    let use_case = ContractBuildUseCase::new(ParserSet {
        template: &templates,
        class: &classes,
        style: &CssStyleParser,
    });

    let requests = vec![
        BuildRequest::new(&class_path),
        BuildRequest::new(dir.path().join("missing.component.ts")),
        BuildRequest::new(&class_path).with_name("SecondCard"),
    ];
    let results = use_case.build_many(&requests);

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().meta.name, "CardComponent");
    assert!(matches!(results[1], Err(ContractError::MissingInput { .. })));
    assert_eq!(results[2].as_ref().unwrap().meta.name, "SecondCard");
}
