//! Query Engine
//!
//! Case-insensitive substring search over the keys and leaf strings of the
//! selected contract sections. Results are capped; `count` is not.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::debug;

use crate::errors::Result;
use crate::features::contract_diff::domain::{ChangePath, PathSegment};
use crate::features::contract_query::domain::{
    ContractQuery, MatchKind, QueryHit, QueryResult, QuerySection, MAX_RESULTS,
};
use crate::shared::models::Contract;

#[derive(Debug, Clone, Copy)]
pub struct ContractQueryEngine {
    max_results: usize,
}

impl Default for ContractQueryEngine {
    fn default() -> Self {
        Self {
            max_results: MAX_RESULTS,
        }
    }
}

impl ContractQueryEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self, contract: &Contract, query: &ContractQuery) -> Result<QueryResult> {
        let tree = contract.to_value()?;
        let sections = query.effective_sections();
        let needle = query.search_text.trim().to_lowercase();

        let mut hits = Vec::new();
        if !needle.is_empty() {
            for section in &sections {
                if let Some(root) = tree.get(section.as_str()) {
                    let mut path = vec![PathSegment::key(section.as_str())];
                    search(root, &needle, *section, &mut path, &mut hits);
                }
            }
        }

        let count = hits.len();
        let summary = summarize(&query.search_text, &sections, &hits, self.max_results);
        hits.truncate(self.max_results);

        debug!(
            search = %query.search_text,
            count,
            returned = hits.len(),
            "contract queried"
        );

        Ok(QueryResult {
            query: query.clone(),
            results: hits,
            count,
            summary,
            sections_searched: sections,
        })
    }
}

fn search(
    node: &Value,
    needle: &str,
    section: QuerySection,
    path: &mut ChangePath,
    hits: &mut Vec<QueryHit>,
) {
    match node {
        Value::Object(map) => {
            for (key, child) in map {
                path.push(PathSegment::Key(key.clone()));
                if key.to_lowercase().contains(needle) {
                    hits.push(QueryHit {
                        path: path.clone(),
                        value: child.clone(),
                        match_kind: MatchKind::Key,
                        section,
                    });
                }
                search(child, needle, section, path, hits);
                path.pop();
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                path.push(PathSegment::Index(index));
                search(child, needle, section, path, hits);
                path.pop();
            }
        }
        Value::String(text) if text.to_lowercase().contains(needle) => {
            hits.push(QueryHit {
                path: path.clone(),
                value: node.clone(),
                match_kind: MatchKind::String,
                section,
            });
        }
        _ => {}
    }
}

fn summarize(
    search_text: &str,
    sections: &[QuerySection],
    hits: &[QueryHit],
    max_results: usize,
) -> String {
    let searched: Vec<&str> = sections.iter().map(QuerySection::as_str).collect();
    if hits.is_empty() {
        return format!(
            "No matches for \"{}\" in {}",
            search_text,
            searched.join(", ")
        );
    }

    let mut per_section: BTreeMap<QuerySection, usize> = BTreeMap::new();
    for hit in hits {
        *per_section.entry(hit.section).or_default() += 1;
    }
    let breakdown: Vec<String> = per_section
        .iter()
        .map(|(section, n)| format!("{}: {}", section, n))
        .collect();
    let noun = if hits.len() == 1 { "match" } else { "matches" };
    let mut summary = format!(
        "{} {} for \"{}\" ({})",
        hits.len(),
        noun,
        search_text,
        breakdown.join(", ")
    );
    if hits.len() > max_results {
        summary.push_str(&format!("; showing first {}", max_results));
    }
    summary
}
