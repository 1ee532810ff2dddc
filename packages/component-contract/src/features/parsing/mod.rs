//! Parsing Feature - boundary between raw component sources and the extractors
//!
//! - domain/: closed node trees for markup, class and style sources
//! - ports/: front-end traits supplied by the caller
//! - infrastructure/: built-in CSS parser

pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use infrastructure::CssStyleParser;
pub use ports::{ClassParser, ParserSet, StyleParser, TemplateParser};
