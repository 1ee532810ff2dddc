//! Parsing ports (traits implemented by external front-ends)

mod parser;

pub use parser::{ClassParser, ParserSet, StyleParser, TemplateParser};
