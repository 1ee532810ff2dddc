//! Interface extraction domain rules

pub mod declared_io;
pub mod lifecycle;
pub mod type_resolution;

pub use declared_io::{split_declared, DeclaredIo};
pub use lifecycle::{hook_for_interface, hook_for_method, LIFECYCLE_HOOKS};
pub use type_resolution::{
    generic_argument, infer_literal_type, resolve_type, TypeEvidence, UNKNOWN_TYPE,
};
