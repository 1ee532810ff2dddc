//! Contract Builder Feature
//!
//! - domain/: build requests, component discovery
//! - application/: assembler and build use case
//! - infrastructure/: source file access

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{ContractAssembler, ContractBuildUseCase, ContractParts};
pub use domain::{BuildRequest, ComponentMetadata};
