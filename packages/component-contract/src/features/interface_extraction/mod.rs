//! Interface Extraction Feature - class tree → PublicInterface

pub mod domain;
pub mod infrastructure;

pub use domain::DeclaredIo;
pub use infrastructure::InterfaceExtractor;
