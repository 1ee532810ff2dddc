pub mod extraction;
pub mod slot_naming;

pub use extraction::TemplateExtraction;
pub use slot_naming::derive_slot_name;
