//! Contract builder domain

pub mod build_request;
pub mod component_metadata;

pub use build_request::BuildRequest;
pub use component_metadata::{ComponentKind, ComponentMetadata};
