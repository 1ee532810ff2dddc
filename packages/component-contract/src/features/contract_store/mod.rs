//! Contract Store Feature - JSON persistence of contracts and diff reports

pub mod domain;
pub mod infrastructure;

pub use domain::{ContractSummary, StoredContract, StoredMetadata};
pub use infrastructure::{list_contracts, load_contract, ContractStore};
