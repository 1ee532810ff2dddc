pub mod class_walker;

pub use class_walker::InterfaceExtractor;
