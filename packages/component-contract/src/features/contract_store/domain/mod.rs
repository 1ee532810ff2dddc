pub mod envelope;

pub use envelope::{
    stored_file_name, ContractSummary, StoredContract, StoredMetadata, CONTRACT_FILE_SUFFIX,
    REPORT_FILE_SUFFIX,
};
