//! Utility modules shared across features
//!
//! - `path_stack`: ancestor token stack for element keys
//! - `hashing`: content digests

pub mod hashing;
pub mod path_stack;

pub use hashing::content_hash;
pub use path_stack::{element_token, PathStack};
