//! Parser ports
//!
//! Front-ends that turn raw component sources into the trees in
//! `parsing::domain`. Template and class parsers are supplied by the caller;
//! a plain CSS implementation of [`StyleParser`] ships in `infrastructure`.

use std::path::Path;

use crate::errors::Result;
use crate::features::parsing::domain::{ClassSourceFile, StyleSheetNode, TemplateNode};

/// Markup template front-end
pub trait TemplateParser: Send + Sync {
    /// Parse template text; `path` is used for error reporting only
    fn parse_template(&self, source: &str, path: &Path) -> Result<Vec<TemplateNode>>;
}

/// Class/interface front-end
pub trait ClassParser: Send + Sync {
    fn parse_class_file(&self, source: &str, path: &Path) -> Result<ClassSourceFile>;
}

/// Style sheet front-end
pub trait StyleParser: Send + Sync {
    fn parse_stylesheet(&self, source: &str, path: &Path) -> Result<StyleSheetNode>;
}

/// The three front-ends used by one contract build
pub struct ParserSet<'a> {
    pub template: &'a dyn TemplateParser,
    pub class: &'a dyn ClassParser,
    pub style: &'a dyn StyleParser,
}
