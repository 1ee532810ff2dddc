//! Contract Query Feature - bounded, section-scoped text search

pub mod application;
pub mod domain;

pub use application::ContractQueryEngine;
pub use domain::{ContractQuery, MatchKind, QueryHit, QueryResult, QuerySection};
