//! Contract diff tests - pipeline behaviour over whole contracts

#[path = "../common/mod.rs"]
mod common;
use common::*;

use component_contract::config::DiffConfig;
use component_contract::features::contract_diff::domain::{ChangeType, PathSegment};
use component_contract::features::contract_diff::{ContractDiffUseCase, ContractDiffer};
use component_contract::features::contract_store::ContractStore;
use pretty_assertions::assert_eq;
use serde_json::json;

fn keys(segments: &[&str]) -> Vec<PathSegment> {
    segments.iter().map(|s| PathSegment::key(*s)).collect()
}

#[test]
fn diff_of_identical_contracts_is_empty() {
    let contract = card_contract().build();

    let result = ContractDiffer::new().diff(&contract, &contract).unwrap();

    assert_eq!(result.summary.total, 0);
    assert!(result.changes.is_empty());
    assert!(result.dom_path_dictionary.is_empty());
    assert_eq!(result.summary.describe(), "No changes");
}

#[test]
fn diff_selector_rename_touches_styles_only() {
    let before = card_contract().build();
    let mut after = before.clone();
    let mut rule = after.styles.rules.remove(".title").unwrap();
    rule.selector = ".heading".to_string();
    after.styles.rules.insert(".heading".to_string(), rule);

    let result = ContractDiffer::new().diff(&before, &after).unwrap();

    assert!(!result.changes.contains_key("dom"));
    let styles = &result.changes["styles"];
    assert_eq!(styles[&ChangeType::Remove].len(), 1);
    assert_eq!(styles[&ChangeType::Create].len(), 1);
    assert_eq!(styles[&ChangeType::Remove][0].path, keys(&["rules", ".title"]));
    assert_eq!(result.summary.total, 2);
}

#[test]
fn diff_consolidates_multiple_rule_removals() {
    let before = card_contract().build();
    let mut after = before.clone();
    after.styles.rules.clear();

    let result = ContractDiffer::new().diff(&before, &after).unwrap();

    let removed = &result.changes["styles"][&ChangeType::Remove];
    assert_eq!(removed.len(), 1);
    assert_eq!(removed[0].path, keys(&["rules"]));
    assert_eq!(removed[0].old_value, Some(json!([".card", ".title", "button"])));
    assert_eq!(result.summary.total, 1);
}

#[test]
fn diff_without_consolidation_keeps_each_removal() {
    let before = card_contract().build();
    let mut after = before.clone();
    after.styles.rules.clear();
    let config = DiffConfig {
        consolidate_style_rules: false,
        ..DiffConfig::default()
    };

    let result = ContractDiffer::with_config(config).diff(&before, &after).unwrap();

    assert_eq!(result.changes["styles"][&ChangeType::Remove].len(), 3);
}

#[test]
fn diff_removed_element_uses_path_aliases() {
    let before = card_contract().build();
    let after = ContractBuilder::new("Card")
        .element("div.card", "div", None)
        .static_attr("div.card", "class", "card")
        .element("div.card > button", "button", Some("div.card"))
        .input("title", "string")
        .input("count", "number")
        .event("closed", "void")
        .method("toggle", "void")
        .slot("default", None)
        .rule(".card", &[("padding", "8px")], &["div.card"])
        .rule(".title", &[("font-weight", "bold")], &["div.card > h2.title"])
        .rule("button", &[("color", "red")], &["div.card > button"])
        .build();

    let result = ContractDiffer::new().diff(&before, &after).unwrap();

    let dictionary = &result.dom_path_dictionary;
    assert_eq!(
        dictionary.resolve("@1").map(String::as_str),
        Some("div.card > h2.title")
    );
    assert_eq!(dictionary.resolve("@2").map(String::as_str), Some("div.card"));

    let dom = &result.changes["dom"];
    let removed: Vec<_> = dom[&ChangeType::Remove].iter().map(|c| c.path.clone()).collect();
    assert_eq!(
        removed,
        vec![
            keys(&["@1"]),
            vec![
                PathSegment::key("@2"),
                PathSegment::key("childKeys"),
                PathSegment::Index(1)
            ],
        ]
    );
    assert_eq!(dom[&ChangeType::Change][0].path[0], PathSegment::key("@2"));
    assert_eq!(result.summary.by_domain["dom"][&ChangeType::Remove], 2);
}

#[test]
fn diff_without_dedupe_keeps_element_keys() {
    let before = card_contract().build();
    let mut after = before.clone();
    after.dom.get_mut("div.card > button").unwrap().tag = "a".to_string();
    let config = DiffConfig {
        dedupe_dom_paths: false,
        ..DiffConfig::default()
    };

    let result = ContractDiffer::with_config(config).diff(&before, &after).unwrap();

    assert!(result.dom_path_dictionary.is_empty());
    let changed = &result.changes["dom"][&ChangeType::Change][0];
    assert_eq!(changed.path, keys(&["div.card > button", "tag"]));
    assert_eq!(changed.old_value, Some(json!("button")));
    assert_eq!(changed.new_value, Some(json!("a")));
}

#[test]
fn use_case_is_unchanged_compares_hashes_only() {
    let use_case = ContractDiffUseCase::new();
    let before = card_contract().build();
    let same_hash = card_contract().input("extra", "boolean").build();
    let other_hash = card_contract().hash("different").build();

    assert!(use_case.is_unchanged(&before, &same_hash));
    assert!(!use_case.is_unchanged(&before, &other_hash));

    // The engine itself never short-circuits on equal hashes.
    let result = use_case.diff(&before, &same_hash).unwrap();
    assert_eq!(result.summary.count(ChangeType::Create), 1);
}

#[test]
fn use_case_diffs_stored_contracts_and_saves_report() {
    let dir = tempfile::tempdir().unwrap();
    let store = ContractStore::new(dir.path());
    let before = card_contract().build();
    let after = card_contract()
        .generated_at(fixed_time() + chrono::Duration::hours(1))
        .method("reset", "void")
        .hash("v2")
        .build();
    let before_path = store.save(&before, vec!["card.component.ts".to_string()]).unwrap();
    let after_path = store.save(&after, vec!["card.component.ts".to_string()]).unwrap();

    let report = ContractDiffUseCase::new()
        .diff_files(&before_path, &after_path)
        .unwrap();

    assert_eq!(report.before, before_path.display().to_string());
    assert_eq!(report.component_name, "Card");
    assert_eq!(report.summary.by_domain["publicApi"][&ChangeType::Create], 1);
    assert_eq!(report.summary.by_domain["meta"][&ChangeType::Change], 2);

    let report_path = store.save_report(&report).unwrap();
    assert!(report_path.to_string_lossy().ends_with(".diff.json"));
    let loaded = store.load_report(&report_path).unwrap();
    assert_eq!(loaded, report);
}

#[test]
fn report_serializes_expected_fields() {
    let before = card_contract().build();
    let after = card_contract().input("extra", "boolean").build();

    let report = ContractDiffUseCase::new().report(&before, &after).unwrap();
    let value = serde_json::to_value(&report).unwrap();

    for field in [
        "before",
        "after",
        "componentName",
        "timestamp",
        "domPathDictionary",
        "changes",
        "summary",
    ] {
        assert!(value.get(field).is_some(), "missing {field}");
    }
    assert_eq!(value["changes"]["publicApi"]["CREATE"][0]["path"], json!(["properties", "extra"]));
}
