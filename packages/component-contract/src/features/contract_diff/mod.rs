//! Contract Diff Feature
//!
//! - domain/: change records and the pipeline stages
//! - application/: the engine and the use case

pub mod application;
pub mod domain;

pub use application::{ContractDiffUseCase, ContractDiffer};
pub use domain::{
    ChangeRecord, ChangeType, DiffReport, DiffResult, DiffSummary, DomPathDictionary, PathSegment,
};
