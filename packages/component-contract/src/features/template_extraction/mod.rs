//! Template Extraction Feature - markup tree → DOM structure + slots

pub mod domain;
pub mod infrastructure;

pub use domain::TemplateExtraction;
pub use infrastructure::TemplateExtractor;
