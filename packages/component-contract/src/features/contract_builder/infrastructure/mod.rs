pub mod source_reader;

pub use source_reader::{read_source, resolve_url, SourceText};
