pub mod query;

pub use query::{ContractQuery, MatchKind, QueryHit, QueryResult, QuerySection, MAX_RESULTS};
