pub mod assembler;
pub mod build_contract;

pub use assembler::{ComponentIdentity, ContractAssembler, ContractParts};
pub use build_contract::ContractBuildUseCase;
