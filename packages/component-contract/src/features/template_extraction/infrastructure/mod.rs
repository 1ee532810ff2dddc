pub mod template_walker;

pub use template_walker::TemplateExtractor;
