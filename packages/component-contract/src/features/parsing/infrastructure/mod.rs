//! Built-in front-end implementations

pub mod css_parser;

pub use css_parser::{parse_stylesheet, CssStyleParser};
