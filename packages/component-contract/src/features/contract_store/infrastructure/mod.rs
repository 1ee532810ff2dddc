pub mod json_store;

pub use json_store::{list_contracts, load_contract, ContractStore};
