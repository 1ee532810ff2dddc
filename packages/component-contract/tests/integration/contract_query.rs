//! Contract query tests - section scoping, caps, summaries

#[path = "../common/mod.rs"]
mod common;
use common::*;

use component_contract::features::contract_diff::domain::PathSegment;
use component_contract::features::contract_query::{
    ContractQuery, ContractQueryEngine, MatchKind, QuerySection,
};
use pretty_assertions::assert_eq;

#[test]
fn query_finds_public_api_key() {
    let contract = card_contract().build();
    let query = ContractQuery::new("count").in_sections([QuerySection::PublicApi]);

    let result = ContractQueryEngine::new().query(&contract, &query).unwrap();

    assert_eq!(result.count, 1);
    let hit = &result.results[0];
    assert_eq!(hit.section, QuerySection::PublicApi);
    assert_eq!(hit.match_kind, MatchKind::Key);
    assert_eq!(
        hit.path,
        vec![
            PathSegment::key("publicApi"),
            PathSegment::key("properties"),
            PathSegment::key("count")
        ]
    );
    assert_eq!(hit.value["type"], "number");
    assert_eq!(result.sections_searched, vec![QuerySection::PublicApi]);
}

#[test]
fn query_without_matches_reports_no_matches() {
    let contract = card_contract().build();
    let query = ContractQuery::new("count").in_sections([QuerySection::Styles]);

    let result = ContractQueryEngine::new().query(&contract, &query).unwrap();

    assert_eq!(result.count, 0);
    assert!(result.results.is_empty());
    assert!(result.summary.starts_with("No matches"));
}

#[test]
fn query_is_case_insensitive_across_default_sections() {
    let contract = card_contract().build();

    let result = ContractQueryEngine::new()
        .query(&contract, &ContractQuery::new("TITLE"))
        .unwrap();

    assert_eq!(result.sections_searched.len(), 4);
    let sections: std::collections::BTreeSet<_> =
        result.results.iter().map(|h| h.section).collect();
    assert!(sections.contains(&QuerySection::PublicApi));
    assert!(sections.contains(&QuerySection::Dom));
    assert!(sections.contains(&QuerySection::Styles));
    assert!(result
        .results
        .iter()
        .any(|h| h.match_kind == MatchKind::String && h.value == "div.card > h2.title"));
    assert!(result.summary.contains("matches for \"TITLE\""));
}

#[test]
fn query_caps_results_but_counts_all() {
    let mut builder = ContractBuilder::new("Grid").element("div.grid", "div", None);
    for i in 0..120 {
        let key = format!("div.grid > span.cell-{}", i);
        builder = builder.element(&key, "span", Some("div.grid"));
    }
    let contract = builder.build();
    let query = ContractQuery::new("cell").in_sections([QuerySection::Dom]);

    let result = ContractQueryEngine::new().query(&contract, &query).unwrap();

    // Each cell key matches once as an element key and once as a child key entry.
    assert_eq!(result.count, 240);
    assert_eq!(result.results.len(), 100);
    assert!(result.is_truncated());
    assert!(result.summary.contains("showing first 100"));
}

#[test]
fn query_result_json_shape() {
    let contract = card_contract().build();
    let query = ContractQuery::new("padding");

    let result = ContractQueryEngine::new().query(&contract, &query).unwrap();
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["query"]["searchText"], "padding");
    assert_eq!(value["count"], 1);
    assert_eq!(value["results"][0]["matchKind"], "key");
    assert_eq!(value["results"][0]["section"], "styles");
    assert_eq!(value["sectionsSearched"][1], "publicApi");
}
