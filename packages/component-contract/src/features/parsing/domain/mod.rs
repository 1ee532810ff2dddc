//! Parser output trees (boundary types)

pub mod class_node;
pub mod style_node;
pub mod template_node;

pub use class_node::*;
pub use style_node::*;
pub use template_node::*;
