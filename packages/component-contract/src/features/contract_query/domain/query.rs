//! Query model: sections, hits and results

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::features::contract_diff::domain::ChangePath;

pub const MAX_RESULTS: usize = 100;

/// Contract sections a query can search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuerySection {
    Meta,
    PublicApi,
    Dom,
    Styles,
}

impl QuerySection {
    pub const ALL: [QuerySection; 4] = [
        QuerySection::Meta,
        QuerySection::PublicApi,
        QuerySection::Dom,
        QuerySection::Styles,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuerySection::Meta => "meta",
            QuerySection::PublicApi => "publicApi",
            QuerySection::Dom => "dom",
            QuerySection::Styles => "styles",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == name.trim())
    }
}

impl fmt::Display for QuerySection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractQuery {
    /// Empty means every section
    #[serde(default)]
    pub sections: Vec<QuerySection>,
    pub search_text: String,
}

impl ContractQuery {
    pub fn new(search_text: impl Into<String>) -> Self {
        Self {
            sections: Vec::new(),
            search_text: search_text.into(),
        }
    }

    pub fn in_sections(mut self, sections: impl IntoIterator<Item = QuerySection>) -> Self {
        self.sections = sections.into_iter().collect();
        self
    }

    /// Requested sections, deduplicated, in request order
    pub fn effective_sections(&self) -> Vec<QuerySection> {
        if self.sections.is_empty() {
            return QuerySection::ALL.to_vec();
        }
        let mut sections = Vec::with_capacity(self.sections.len());
        for section in &self.sections {
            if !sections.contains(section) {
                sections.push(*section);
            }
        }
        sections
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Key,
    String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryHit {
    pub path: ChangePath,
    pub value: Value,
    pub match_kind: MatchKind,
    pub section: QuerySection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    pub query: ContractQuery,
    pub results: Vec<QueryHit>,
    /// Total hits, including those past the result cap
    pub count: usize,
    pub summary: String,
    pub sections_searched: Vec<QuerySection>,
}

impl QueryResult {
    pub fn is_truncated(&self) -> bool {
        self.count > self.results.len()
    }
}
